// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::FetchCompletion;
use crate::error::Error;
use crate::ui::{album_list, gallery, notifications};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    AlbumList(album_list::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// A page fetch finished (successfully or not).
    PageLoaded(FetchCompletion),
    /// Cover or gallery image bytes arrived.
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The window was resized; the height drives the "fill the viewport" check.
    WindowResized(iced::Size),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional listing endpoint, overriding `[api] base_url`.
    pub api_url: Option<String>,
    /// Optional page size, overriding `[api] page_size`.
    pub page_size: Option<u32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ALBUM_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
