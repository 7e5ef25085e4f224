// SPDX-License-Identifier: MPL-2.0
//! Album listing port definition.
//!
//! [`AlbumSource`] is the single inbound dependency of the pagination
//! controller: "give me page N of size S". The HTTP adapter lives in
//! `infrastructure::http`; tests use scripted in-memory sources.

use crate::domain::{ListPage, PageRequest};
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Fetches pages of albums from some backing store.
///
/// The returned future must be `'static` so callers can hand it to an Iced
/// `Task` or a tokio task without borrowing the source. Implementations are
/// expected to clone whatever handles they need (HTTP client, base URL) into
/// the future.
///
/// Both transport failures (`Err`) and application-level errors
/// (`Ok(page)` with non-empty [`ListPage::errors`]) are valid outcomes; the
/// controller treats them identically.
pub trait AlbumSource: Send + Sync {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ListPage>>;
}

impl<T: AlbumSource + ?Sized> AlbumSource for Arc<T> {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ListPage>> {
        (**self).fetch_page(request)
    }
}

/// Shared, type-erased album source.
pub type SharedAlbumSource = Arc<dyn AlbumSource>;
