// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus session-scoped resources that wrap external
//! crates.
//!
//! # Available Adapters
//!
//! - [`http`]: album listing over HTTP (implements [`AlbumSource`]) and image
//!   downloads
//! - [`image_cache`]: bounded in-memory cache of decoded image handles
//!
//! [`AlbumSource`]: crate::application::port::AlbumSource

pub mod http;
pub mod image_cache;

pub use http::{HttpAlbumSource, ImageFetcher};
pub use image_cache::{ImageCache, LoadState};
