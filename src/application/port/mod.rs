// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the application layer stays
//! independent of the HTTP stack and of Iced.
//!
//! # Available Ports
//!
//! - [`album_source`]: paginated album listing
//!
//! # Example
//!
//! ```ignore
//! use album_gallery::application::port::AlbumSource;
//! use album_gallery::domain::PageRequest;
//!
//! async fn first_page(source: &impl AlbumSource) {
//!     let page = source.fetch_page(PageRequest::new(1, 10)).await;
//! }
//! ```

pub mod album_source;

pub use album_source::{AlbumSource, SharedAlbumSource};
