// SPDX-License-Identifier: MPL-2.0
//! Application layer - pagination and presentation state.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`pagination`]: the incremental album list controller
//! - [`rows`]: reconciliation of rendered rows with the album list
//! - [`gallery`]: gallery overlay and list screen state
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (Iced) uses application layer state
//!
//! Nothing in this layer touches Iced or the network, so all of it can be
//! exercised from plain `#[tokio::test]` functions with scripted sources.

pub mod gallery;
pub mod pagination;
pub mod port;
pub mod rows;

pub use gallery::{FooterStatus, Gallery, ListScreen, Overlay};
pub use pagination::{
    FetchCompletion, ListSnapshot, PaginatedListSource, PaginationState, PendingPage, Ticket,
    Transition,
};
pub use rows::{AlbumRow, AlbumRows, RowComparison};
