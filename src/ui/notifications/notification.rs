// SPDX-License-Identifier: MPL-2.0
//! Toast contents.
//!
//! The app raises two kinds of toast: warnings about the saved settings and
//! errors carrying an [`Error`]. Page fetch errors are tagged so they can be
//! withdrawn once a later page loads.

use crate::app::config::NOTIFICATION_LONG_MS;
use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Problem the app worked around (orange, 5s duration).
    Warning,
    /// Failure the user should see (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// `None` means the toast stays until dismissed.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(Duration::from_millis(NOTIFICATION_LONG_MS)),
            Severity::Error => None,
        }
    }
}

/// A toast waiting to be shown or on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key of the message.
    message_key: String,
    /// Value for the message's `detail` argument.
    detail: Option<String>,
    page_fetch: bool,
    created_at: Instant,
}

impl Notification {
    fn new(severity: Severity, message_key: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            detail,
            page_fetch: false,
            created_at: Instant::now(),
        }
    }

    /// Warning shown with the message for `message_key` and no arguments.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key, None)
    }

    /// Error toast describing `err`.
    #[must_use]
    pub fn error(err: &Error) -> Self {
        Self::new(Severity::Error, err.i18n_key(), Some(err.detail()))
    }

    /// Error toast for a page that failed to load.
    ///
    /// Removed by [`Manager::clear_fetch_errors`](super::Manager::clear_fetch_errors).
    #[must_use]
    pub fn page_fetch_failed(err: &Error) -> Self {
        Self {
            page_fetch: true,
            ..Self::error(err)
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn is_page_fetch_error(&self) -> bool {
        self.page_fetch
    }

    /// Returns whether the toast has outlived its severity's duration.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| self.created_at.elapsed() >= duration)
    }
}
