// SPDX-License-Identifier: MPL-2.0
//! Domain value types.
//!
//! Pure data with no I/O and no UI dependency: albums, images, and the page
//! payload returned by the listing API.

pub mod album;
pub mod page;

pub use album::{Album, Image, RowKey};
pub use page::{ListPage, PageContent, PageRequest};
