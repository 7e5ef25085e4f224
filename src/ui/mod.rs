// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message` enum, a `ViewContext` borrowing what it renders, and a
//! `view` function. State lives in the application layer.
//!
//! # Screens
//!
//! - [`album_list`] - Infinite-scrolling album list with status footer
//! - [`gallery`] - Image gallery overlay for the selected album
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod album_list;
pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;
