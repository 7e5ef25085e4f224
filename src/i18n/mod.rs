// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with `.ftl` files embedded at build
//! time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Message arguments for interpolated strings
//! - Visible `MISSING: key` marker for untranslated keys

pub mod fluent;

pub use fluent::I18n;
