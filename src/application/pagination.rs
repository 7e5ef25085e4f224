// SPDX-License-Identifier: MPL-2.0
//! Incremental pagination controller for the album list.
//!
//! [`PaginatedListSource`] owns the pagination cursor, issues one fetch at a
//! time through an [`AlbumSource`](crate::application::port::AlbumSource), merges successful pages into an
//! append-only album list, and detects the end of the data.
//!
//! The controller is split in two phases so it can be driven from a
//! single-threaded event loop without blocking it:
//!
//! 1. [`PaginatedListSource::request_next_page`] decides whether a fetch may
//!    start and, if so, returns a [`PendingPage`] holding a `'static` future.
//! 2. Whoever awaited that future hands the resulting [`FetchCompletion`] back
//!    to [`PaginatedListSource::complete`], which applies it.
//!
//! Every request carries a [`Ticket`]. A completion whose ticket does not match
//! the request currently in flight (because it was cancelled) is ignored, so
//! late responses can never mutate a list that has moved on.
//!
//! # Example
//!
//! ```ignore
//! let mut list = PaginatedListSource::new(source, 10);
//! while let Some(transition) = list.load_next_page().await {
//!     if matches!(transition, Transition::EndReached) {
//!         break;
//!     }
//! }
//! ```

use crate::application::port::SharedAlbumSource;
use crate::domain::{Album, ListPage, PageContent, PageRequest};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use std::ops::Range;
use tracing::{debug, error, info, warn};

/// Page number of the first request in a session.
pub const FIRST_PAGE: u32 = 1;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Result of one fetch, ready to be applied to the controller.
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    ticket: Ticket,
    request: PageRequest,
    outcome: Result<ListPage>,
}

impl FetchCompletion {
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    #[must_use]
    pub fn request(&self) -> PageRequest {
        self.request
    }

    #[must_use]
    pub fn outcome(&self) -> &Result<ListPage> {
        &self.outcome
    }
}

/// A fetch that has been authorized but not yet awaited.
pub struct PendingPage {
    ticket: Ticket,
    request: PageRequest,
    fetch: BoxFuture<'static, Result<ListPage>>,
}

impl std::fmt::Debug for PendingPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingPage")
            .field("ticket", &self.ticket)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl PendingPage {
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    #[must_use]
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Awaits the fetch and packages its outcome.
    pub async fn run(self) -> FetchCompletion {
        let outcome = self.fetch.await;
        FetchCompletion {
            ticket: self.ticket,
            request: self.request,
            outcome,
        }
    }
}

/// What a completion did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Albums were appended at `range`. `first_page` is true only for the
    /// completion that made the list ready.
    Appended {
        range: Range<usize>,
        first_page: bool,
    },
    /// An empty, error-free page: the list is complete.
    EndReached,
    /// The fetch failed; nothing was applied.
    Failed(Error),
    /// The completion belonged to a cancelled request.
    Ignored,
}

/// Pagination cursor and accumulated albums for one list session.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    page_number: u32,
    page_size: u32,
    items: Vec<Album>,
    end_of_list: bool,
    in_flight: Option<(Ticket, PageRequest)>,
    ready: bool,
    loading: bool,
    last_error: Option<Error>,
}

impl PaginationState {
    /// Fresh session state. A zero page size is raised to 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page_number: FIRST_PAGE,
            page_size: page_size.max(1),
            items: Vec::new(),
            end_of_list: false,
            in_flight: None,
            ready: false,
            loading: false,
            last_error: None,
        }
    }

    /// The request a fetch would issue right now.
    #[must_use]
    pub fn next_request(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }

    /// Marks `ticket` as in flight, unless the list is finished or another
    /// request is outstanding.
    fn begin(&mut self, ticket: Ticket) -> Option<PageRequest> {
        if self.end_of_list {
            debug!(page = self.page_number, "load more ignored: end of list");
            return None;
        }
        if let Some((_, pending)) = self.in_flight {
            debug!(page = pending.page(), "load more ignored: request in flight");
            return None;
        }

        let request = self.next_request();
        self.in_flight = Some((ticket, request));
        self.loading = true;
        self.last_error = None;
        Some(request)
    }

    fn apply(&mut self, completion: FetchCompletion) -> Transition {
        match self.in_flight {
            Some((ticket, _)) if ticket == completion.ticket => {}
            _ => {
                warn!(
                    page = completion.request.page(),
                    "discarding completion of a cancelled request"
                );
                return Transition::Ignored;
            }
        }
        self.in_flight = None;

        let content = match completion.outcome {
            Ok(page) => page.into_content(),
            Err(err) => return self.fail(completion.request, err),
        };

        match content {
            PageContent::Failed(errors) => self.fail(completion.request, Error::Api(errors)),
            PageContent::Albums(albums) => {
                let start = self.items.len();
                let count = albums.len();
                self.items.extend(albums);
                self.page_number += 1;
                self.loading = false;

                let first_page = !self.ready;
                self.ready = true;

                info!(
                    page = completion.request.page(),
                    albums = count,
                    total = self.items.len(),
                    "album page loaded"
                );
                Transition::Appended {
                    range: start..start + count,
                    first_page,
                }
            }
            PageContent::Exhausted => {
                info!(total = self.items.len(), "reached end of the album list");
                self.end_of_list = true;
                Transition::EndReached
            }
        }
    }

    fn fail(&mut self, request: PageRequest, err: Error) -> Transition {
        error!(page = request.page(), error = %err, "error retrieving the album list");
        self.loading = false;
        self.last_error = Some(err.clone());
        Transition::Failed(err)
    }

    fn cancel(&mut self) -> bool {
        if let Some((_, request)) = self.in_flight.take() {
            debug!(page = request.page(), "cancelled in-flight album request");
            self.loading = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn items(&self) -> &[Album] {
        &self.items
    }

    #[must_use]
    pub fn end_of_list(&self) -> bool {
        self.end_of_list
    }

    #[must_use]
    pub fn fetch_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

/// Read-only view of the list, handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct ListSnapshot<'a> {
    pub items: &'a [Album],
    pub page_number: u32,
    pub page_size: u32,
    pub end_of_list: bool,
    pub fetch_in_flight: bool,
    pub loading: bool,
    pub ready: bool,
    pub last_error: Option<&'a Error>,
}

/// Pagination controller bound to an album source.
pub struct PaginatedListSource {
    source: SharedAlbumSource,
    state: PaginationState,
    next_ticket: u64,
}

impl std::fmt::Debug for PaginatedListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedListSource")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl PaginatedListSource {
    #[must_use]
    pub fn new(source: SharedAlbumSource, page_size: u32) -> Self {
        Self {
            source,
            state: PaginationState::new(page_size),
            next_ticket: 0,
        }
    }

    /// Authorizes the next page fetch.
    ///
    /// Returns `None` without touching the state when the list is finished
    /// or a request is already in flight; repeated "load more" triggers are
    /// therefore harmless.
    pub fn request_next_page(&mut self) -> Option<PendingPage> {
        let ticket = Ticket(self.next_ticket);
        let request = self.state.begin(ticket)?;
        self.next_ticket += 1;

        debug!(page = request.page(), size = request.size(), "requesting album page");
        Some(PendingPage {
            ticket,
            request,
            fetch: self.source.fetch_page(request),
        })
    }

    /// Applies the outcome of a fetch previously returned by
    /// [`request_next_page`](Self::request_next_page).
    pub fn complete(&mut self, completion: FetchCompletion) -> Transition {
        self.state.apply(completion)
    }

    /// Requests and applies one page sequentially.
    ///
    /// Returns `None` when no request could be issued.
    pub async fn load_next_page(&mut self) -> Option<Transition> {
        let pending = self.request_next_page()?;
        let completion = pending.run().await;
        Some(self.complete(completion))
    }

    /// Forgets the in-flight request, if any. Its completion will be ignored.
    ///
    /// Returns whether a request was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.state.cancel()
    }

    #[must_use]
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[Album] {
        self.state.items()
    }

    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<'_> {
        ListSnapshot {
            items: self.state.items(),
            page_number: self.state.page_number(),
            page_size: self.state.page_size(),
            end_of_list: self.state.end_of_list(),
            fetch_in_flight: self.state.fetch_in_flight(),
            loading: self.state.is_loading(),
            ready: self.state.is_ready(),
            last_error: self.state.last_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{album, names, ScriptedSource};
    use std::sync::Arc;

    fn controller(source: &Arc<ScriptedSource>, page_size: u32) -> PaginatedListSource {
        PaginatedListSource::new(source.clone(), page_size)
    }

    #[tokio::test]
    async fn pages_accumulate_until_an_empty_page_ends_the_list() {
        let source = Arc::new(ScriptedSource::new([
            Ok(ListPage::albums(vec![album("A"), album("B")])),
            Ok(ListPage::albums(vec![album("C")])),
            Ok(ListPage::default()),
        ]));
        let mut list = controller(&source, 2);

        let first = list.load_next_page().await;
        assert_eq!(
            first,
            Some(Transition::Appended {
                range: 0..2,
                first_page: true
            })
        );
        assert!(list.snapshot().ready);
        assert_eq!(list.snapshot().page_number, 2);
        assert_eq!(names(list.items()), ["A", "B"]);

        let second = list.load_next_page().await;
        assert_eq!(
            second,
            Some(Transition::Appended {
                range: 2..3,
                first_page: false
            })
        );
        assert_eq!(list.snapshot().page_number, 3);
        assert_eq!(names(list.items()), ["A", "B", "C"]);

        assert_eq!(list.load_next_page().await, Some(Transition::EndReached));
        assert!(list.snapshot().end_of_list);
        assert_eq!(names(list.items()), ["A", "B", "C"]);

        assert_eq!(
            source.requests(),
            [
                PageRequest::new(1, 2),
                PageRequest::new(2, 2),
                PageRequest::new(3, 2)
            ]
        );
    }

    #[tokio::test]
    async fn no_request_is_issued_after_end_of_list() {
        let source = Arc::new(ScriptedSource::new([
            Ok(ListPage::albums(vec![album("A")])),
            Ok(ListPage::default()),
            Ok(ListPage::albums(vec![album("late")])),
        ]));
        let mut list = controller(&source, 1);

        list.load_next_page().await;
        list.load_next_page().await;
        assert!(list.snapshot().end_of_list);

        for _ in 0..3 {
            assert!(list.request_next_page().is_none());
            assert_eq!(list.load_next_page().await, None);
        }
        assert_eq!(source.requests().len(), 2);
        assert_eq!(names(list.items()), ["A"]);
        assert_eq!(list.snapshot().page_number, 2);
    }

    #[tokio::test]
    async fn server_errors_leave_state_untouched() {
        let source = Arc::new(ScriptedSource::new([Ok(ListPage::failed([
            "server error",
        ]))]));
        let mut list = controller(&source, 10);

        let transition = list.load_next_page().await;

        assert_eq!(
            transition,
            Some(Transition::Failed(Error::Api(vec!["server error".into()])))
        );
        let snapshot = list.snapshot();
        assert!(!snapshot.ready);
        assert_eq!(snapshot.page_number, 1);
        assert!(snapshot.items.is_empty());
        assert!(!snapshot.end_of_list);
        assert!(!snapshot.fetch_in_flight);
        assert_eq!(
            snapshot.last_error,
            Some(&Error::Api(vec!["server error".into()]))
        );
    }

    #[tokio::test]
    async fn wrong_shaped_body_fails_without_ending_the_list() {
        let body = r#"{"result": [{"AlbumName": "A"}], "errors": []}"#;
        let source = Arc::new(ScriptedSource::new([
            crate::infrastructure::http::decode_page(body),
            Ok(ListPage::albums(vec![album("A")])),
        ]));
        let mut list = controller(&source, 10);

        let transition = list.load_next_page().await;

        assert!(matches!(transition, Some(Transition::Failed(Error::Decode(_)))));
        assert!(!list.state().end_of_list());
        assert_eq!(list.state().page_number(), 1);

        let retry = list.load_next_page().await;
        assert!(matches!(retry, Some(Transition::Appended { .. })));
        assert_eq!(names(list.items()), ["A"]);
    }

    #[tokio::test]
    async fn failed_page_mid_session_keeps_cursor_and_items() {
        let source = Arc::new(ScriptedSource::new([
            Ok(ListPage::albums(vec![album("A")])),
            Err(Error::Http("connection reset".into())),
            Ok(ListPage::albums(vec![album("B")])),
        ]));
        let mut list = controller(&source, 1);

        list.load_next_page().await;
        let failed = list.load_next_page().await;
        assert!(matches!(failed, Some(Transition::Failed(Error::Http(_)))));
        assert_eq!(list.snapshot().page_number, 2);
        assert_eq!(names(list.items()), ["A"]);

        // A later trigger retries the same page.
        list.load_next_page().await;
        assert_eq!(names(list.items()), ["A", "B"]);
        assert!(list.snapshot().last_error.is_none());
        assert_eq!(
            source.requests(),
            [
                PageRequest::new(1, 1),
                PageRequest::new(2, 1),
                PageRequest::new(2, 1)
            ]
        );
    }

    #[tokio::test]
    async fn albums_sent_alongside_errors_are_discarded() {
        let source = Arc::new(ScriptedSource::new([Ok(ListPage {
            result: vec![album("A")],
            errors: vec!["partial failure".into()],
        })]));
        let mut list = controller(&source, 5);

        list.load_next_page().await;

        assert!(list.items().is_empty());
        assert_eq!(list.snapshot().page_number, 1);
    }

    #[tokio::test]
    async fn double_trigger_while_in_flight_issues_one_fetch() {
        let source = Arc::new(ScriptedSource::new([
            Ok(ListPage::albums(vec![album("A"), album("B")])),
            Ok(ListPage::albums(vec![album("A"), album("B")])),
        ]));
        let mut list = controller(&source, 2);

        let pending = list.request_next_page().expect("first trigger should fetch");
        assert!(list.snapshot().fetch_in_flight);
        assert!(list.request_next_page().is_none());
        assert!(list.request_next_page().is_none());

        let transition = list.complete(pending.run().await);

        assert!(matches!(transition, Transition::Appended { .. }));
        assert_eq!(source.requests().len(), 1);
        assert_eq!(names(list.items()), ["A", "B"]);
        assert_eq!(list.snapshot().page_number, 2);
    }

    #[tokio::test]
    async fn completion_after_cancel_is_ignored() {
        let source = Arc::new(ScriptedSource::new([
            Ok(ListPage::albums(vec![album("stale")])),
            Ok(ListPage::albums(vec![album("fresh")])),
        ]));
        let mut list = controller(&source, 1);

        let stale = list.request_next_page().expect("fetch should start");
        assert!(list.cancel());
        assert!(!list.snapshot().fetch_in_flight);
        assert!(!list.snapshot().loading);

        let fresh = list.request_next_page().expect("fetch should restart");
        assert_eq!(list.complete(stale.run().await), Transition::Ignored);
        assert!(list.items().is_empty());

        list.complete(fresh.run().await);
        assert_eq!(names(list.items()), ["fresh"]);
    }

    #[test]
    fn cancel_without_request_is_a_no_op() {
        let source = Arc::new(ScriptedSource::new([]));
        let mut list = controller(&source, 3);
        assert!(!list.cancel());
        assert_eq!(list.state(), &PaginationState::new(3));
    }

    #[tokio::test]
    async fn page_number_tracks_successful_pages() {
        let script = (0..5).map(|i| Ok(ListPage::albums(vec![album(&format!("album-{i}"))])));
        let source = Arc::new(ScriptedSource::new(script));
        let mut list = controller(&source, 1);

        for successes in 1..=5u32 {
            list.load_next_page().await;
            assert_eq!(list.snapshot().page_number, 1 + successes);
            assert_eq!(list.items().len(), successes as usize);
        }
    }

    #[tokio::test]
    async fn empty_first_page_ends_list_without_becoming_ready() {
        let source = Arc::new(ScriptedSource::new([Ok(ListPage::default())]));
        let mut list = controller(&source, 10);

        assert_eq!(list.load_next_page().await, Some(Transition::EndReached));
        assert!(list.snapshot().end_of_list);
        assert!(!list.snapshot().ready);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.next_request(), PageRequest::new(1, 1));
    }
}
