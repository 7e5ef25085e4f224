// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: listing endpoint and page size bounds
//! - **List**: infinite scroll and image cache settings
//! - **Notifications**: toast display limits

// ==========================================================================
// API Defaults
// ==========================================================================

/// Listing endpoint used when neither the config file nor the CLI names one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/albums";

/// Number of albums requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// User agent sent with every HTTP request.
pub const DEFAULT_USER_AGENT: &str = concat!("AlbumGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// List Defaults
// ==========================================================================

/// Distance from the bottom of the list, in logical pixels, under which the
/// next page is requested.
pub const DEFAULT_END_THRESHOLD_PX: f32 = 30.0;

/// Smallest accepted end threshold.
pub const MIN_END_THRESHOLD_PX: f32 = 0.0;

/// Largest accepted end threshold.
pub const MAX_END_THRESHOLD_PX: f32 = 2000.0;

/// Number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 128;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss delay for warning toasts (milliseconds).
pub const NOTIFICATION_LONG_MS: u64 = 5000;
