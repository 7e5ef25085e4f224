// SPDX-License-Identifier: MPL-2.0
//! Album and image value types as served by the album listing API.
//!
//! The wire format uses PascalCase field names (`AlbumName`, `AlbumCover`,
//! `Images`, `ContentURL`); serde renames keep the Rust side idiomatic.
//! Albums carry no identifier of their own: identity in the list is purely
//! positional (see [`RowKey`]).

use serde::{Deserialize, Serialize};

/// A single image belonging to an album.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    /// Remote URL of the full-size image.
    #[serde(rename = "ContentURL")]
    pub content_url: String,
}

impl Image {
    pub fn new(content_url: impl Into<String>) -> Self {
        Self {
            content_url: content_url.into(),
        }
    }
}

/// A photo album: a display name, a cover thumbnail and an ordered image set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "AlbumName")]
    pub name: String,

    /// Remote URL of the cover thumbnail shown in the list row.
    #[serde(rename = "AlbumCover", default)]
    pub cover_image_url: String,

    /// Images shown in the gallery, in display order.
    #[serde(rename = "Images", default)]
    pub images: Vec<Image>,
}

impl Album {
    pub fn new(name: impl Into<String>, cover_image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cover_image_url: cover_image_url.into(),
            images: Vec::new(),
        }
    }

    /// Builder-style helper that replaces the album's image set.
    #[must_use]
    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = urls.into_iter().map(Image::new).collect();
        self
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Positional identifier of an album inside the accumulated list.
///
/// Albums are append-only for the lifetime of a list session, so the index at
/// which an album was appended stays valid until the session is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(usize);

impl RowKey {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}
