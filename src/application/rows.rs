// SPDX-License-Identifier: MPL-2.0
//! Row reconciliation between the accumulated album list and the rendered rows.
//!
//! After each page lands, the list view rebuilds only the rows whose album
//! changed according to the configured [`RowComparison`] strategy. Rows that
//! the strategy considers unchanged keep their previous rendering, even when
//! a field the strategy ignores has changed.

use crate::domain::{Album, RowKey};
use serde::{Deserialize, Serialize};

/// Decides whether two albums at the same position need a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowComparison {
    /// Rows differ only when their names differ. Cover and image changes are
    /// invisible to the diff.
    NameOnly,
    /// Rows differ when any field differs.
    #[default]
    Structural,
}

impl RowComparison {
    #[must_use]
    pub fn rows_differ(self, old: &Album, new: &Album) -> bool {
        match self {
            RowComparison::NameOnly => old.name != new.name,
            RowComparison::Structural => old != new,
        }
    }

    /// Positions of `new` that must be (re-)rendered: every position whose
    /// album differs from the one previously at that position, plus every
    /// position past the end of `old`.
    #[must_use]
    pub fn changed_rows(self, old: &[Album], new: &[Album]) -> Vec<usize> {
        new.iter()
            .enumerate()
            .filter(|(index, album)| {
                old.get(*index)
                    .is_none_or(|previous| self.rows_differ(previous, album))
            })
            .map(|(index, _)| index)
            .collect()
    }
}

/// Render-ready data for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRow {
    pub key: RowKey,
    pub title: String,
    pub cover_url: String,
    pub image_count: usize,
}

impl AlbumRow {
    fn from_album(key: RowKey, album: &Album) -> Self {
        Self {
            key,
            title: album.name.clone(),
            cover_url: album.cover_image_url.clone(),
            image_count: album.image_count(),
        }
    }
}

/// Rendered rows plus the album list they were last reconciled against.
#[derive(Debug, Clone, Default)]
pub struct AlbumRows {
    comparison: RowComparison,
    rows: Vec<AlbumRow>,
    source: Vec<Album>,
}

impl AlbumRows {
    #[must_use]
    pub fn new(comparison: RowComparison) -> Self {
        Self {
            comparison,
            rows: Vec::new(),
            source: Vec::new(),
        }
    }

    /// Reconciles the rows with `albums` and returns the keys of the rows that
    /// were rebuilt.
    pub fn sync(&mut self, albums: &[Album]) -> Vec<RowKey> {
        let changed = self.comparison.changed_rows(&self.source, albums);

        self.rows.truncate(albums.len());
        for &index in &changed {
            let row = AlbumRow::from_album(RowKey::new(index), &albums[index]);
            if index < self.rows.len() {
                self.rows[index] = row;
            } else {
                self.rows.push(row);
            }
        }
        self.source = albums.to_vec();

        changed.into_iter().map(RowKey::new).collect()
    }

    #[must_use]
    pub fn rows(&self) -> &[AlbumRow] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, key: RowKey) -> Option<&AlbumRow> {
        self.rows.get(key.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn comparison(&self) -> RowComparison {
        self.comparison
    }
}
