// SPDX-License-Identifier: MPL-2.0
//! `album_gallery` is an infinite-scrolling album browser built with the Iced
//! GUI framework.
//!
//! Albums are fetched page by page from a JSON listing endpoint and appended
//! to a scrollable list as the user nears its end. Selecting an album opens
//! a gallery overlay over the list.
//!
//! # Layers
//!
//! - [`domain`] - Album and page value types
//! - [`application`] - Pagination controller, row diffing, gallery state
//! - [`infrastructure`] - HTTP album source and image cache
//! - [`ui`] - Iced views, styles and notifications
//! - [`app`] - Application root, configuration and the update loop

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
