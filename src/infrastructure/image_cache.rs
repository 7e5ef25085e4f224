// SPDX-License-Identifier: MPL-2.0
//! Session-only LRU cache of downloaded images.
//!
//! Covers and gallery images are keyed by URL. An entry is created in the
//! `Loading` state when a download starts, so the same URL is never requested
//! twice while a download is outstanding. A failed download may be started
//! again until it has failed [`MAX_ATTEMPTS`] times.

use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// Capacity used when the configured one is zero.
pub const DEFAULT_CAPACITY: usize = 128;

/// Downloads per URL before a failure is final.
pub const MAX_ATTEMPTS: u32 = 3;

/// Load state of one image.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading { attempt: u32 },
    Loaded(image::Handle),
    Failed { attempts: u32 },
}

/// Bounded URL → image map for the current session.
#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, LoadState>,
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading if it is unknown or failed with attempts left.
    ///
    /// Returns true when the caller should start a download. Empty URLs are
    /// never downloaded.
    pub fn begin(&mut self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        let attempt = match self.entries.peek(url) {
            None => 1,
            Some(LoadState::Failed { attempts }) if *attempts < MAX_ATTEMPTS => attempts + 1,
            Some(_) => return false,
        };
        self.entries.put(url.to_owned(), LoadState::Loading { attempt });
        true
    }

    /// Stores the outcome of a download started with [`begin`](Self::begin).
    pub fn finish(&mut self, url: String, bytes: Result<Vec<u8>, crate::error::Error>) {
        let state = match bytes {
            Ok(bytes) => {
                debug!(%url, size = bytes.len(), "image loaded");
                LoadState::Loaded(image::Handle::from_bytes(bytes))
            }
            Err(err) => {
                let attempts = match self.entries.peek(&url) {
                    Some(LoadState::Loading { attempt }) => *attempt,
                    _ => 1,
                };
                warn!(%url, attempts, error = %err, "image download failed");
                LoadState::Failed { attempts }
            }
        };
        self.entries.put(url, state);
    }

    /// Looks up `url`, refreshing its recency.
    pub fn get(&mut self, url: &str) -> Option<&LoadState> {
        self.entries.get(url)
    }

    /// Looks up `url` without touching the LRU order. Used from `view`.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&LoadState> {
        self.entries.peek(url)
    }

    /// Loaded handle for `url`, if any.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<image::Handle> {
        match self.peek(url) {
            Some(LoadState::Loaded(handle)) => Some(handle.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
