// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests: album builders and a scripted album source.

use crate::application::port::AlbumSource;
use crate::domain::{Album, ListPage, PageRequest};
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Builds an album with a cover derived from its name and no images.
pub fn album(name: &str) -> Album {
    Album::new(name, format!("https://img.example/{name}/cover.jpg"))
}

/// Album names in list order, for compact assertions.
pub fn names(albums: &[Album]) -> Vec<&str> {
    albums.iter().map(|a| a.name.as_str()).collect()
}

/// Album source that replays a fixed script of responses.
///
/// Each `fetch_page` call pops the next response at call time and records the
/// request. Once the script runs out, every further fetch returns an empty,
/// error-free page.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<ListPage>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new(responses: impl IntoIterator<Item = Result<ListPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl AlbumSource for ScriptedSource {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ListPage>> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request);
        let response = self
            .responses
            .lock()
            .expect("responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(ListPage::default()));
        Box::pin(async move { response })
    }
}
