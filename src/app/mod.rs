// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the album list and the
//! gallery overlay.
//!
//! The `App` struct owns the paginated list controller, the rendered rows,
//! the overlay state and the image cache, and turns messages into fetch
//! tasks. Window settings and startup overrides live here so user-facing
//! startup behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{AlbumSource, SharedAlbumSource};
use crate::application::{AlbumRows, ListScreen, Overlay, PaginatedListSource};
use crate::domain::{ListPage, PageRequest};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpAlbumSource, ImageCache, ImageFetcher};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::AppTheme;
use config::Config;
use futures_util::future::BoxFuture;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    list: PaginatedListSource,
    rows: AlbumRows,
    overlay: Overlay,
    images: ImageCache,
    /// `None` when the listing endpoint could not be configured.
    image_fetcher: Option<ImageFetcher>,
    notifications: notifications::Manager,
    end_threshold: f32,
    /// Last known window height. The list fills the window, so the fill
    /// check and the visible-row range on resize use it.
    window_height: f32,
    /// Last reported scroll offset of the list.
    scroll_offset: f32,
    /// Handle of the in-flight page task, aborted on shutdown.
    page_task: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", self.list.state())
            .field("rows", &self.rows.len())
            .field("gallery_open", &self.overlay.is_open())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Source used when the configured endpoint is unusable; every fetch fails
/// with the configuration error so the list shows its error state.
#[derive(Debug)]
struct MisconfiguredSource {
    error: Error,
}

impl AlbumSource for MisconfiguredSource {
    fn fetch_page(&self, _request: PageRequest) -> BoxFuture<'static, crate::error::Result<ListPage>> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, flags: &Flags) {
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
    }
    if let Some(size) = flags.page_size {
        config.api.page_size = config::clamp_page_size(size);
    }
}

impl App {
    /// Initializes application state from config and CLI flags and starts
    /// loading the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        apply_overrides(&mut config, &flags);
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (source, image_fetcher, source_error) =
            match HttpAlbumSource::new(&config.api.base_url, &config.api.user_agent) {
                Ok(http) => {
                    info!(url = %http.base_url(), "using album endpoint");
                    let fetcher = http.image_fetcher();
                    let source: SharedAlbumSource = Arc::new(http);
                    (source, Some(fetcher), None)
                }
                Err(err) => {
                    warn!(url = %config.api.base_url, error = %err, "album endpoint unusable");
                    let source: SharedAlbumSource =
                        Arc::new(MisconfiguredSource { error: err.clone() });
                    (source, None, Some(err))
                }
            };

        let mut app = Self::with_source(source, image_fetcher, &config, i18n);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if let Some(err) = source_error {
            app.notifications.push(Notification::error(&err));
        }

        let task = app.start();
        (app, task)
    }

    /// Builds the app around an arbitrary album source without fetching.
    fn with_source(
        source: SharedAlbumSource,
        image_fetcher: Option<ImageFetcher>,
        config: &Config,
        i18n: I18n,
    ) -> Self {
        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            list: PaginatedListSource::new(source, config.api.effective_page_size()),
            rows: AlbumRows::new(config.list.row_comparison),
            overlay: Overlay::default(),
            images: ImageCache::new(config.list.image_cache_entries),
            image_fetcher,
            notifications: notifications::Manager::new(),
            end_threshold: config.list.effective_end_threshold(),
            window_height: WINDOW_DEFAULT_HEIGHT as f32,
            scroll_offset: 0.0,
            page_task: None,
        }
    }

    /// Requests the first page.
    fn start(&mut self) -> Task<Message> {
        update::request_next_page(&mut self.update_context())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            list: &mut self.list,
            rows: &mut self.rows,
            overlay: &mut self.overlay,
            images: &mut self.images,
            image_fetcher: self.image_fetcher.as_ref(),
            notifications: &mut self.notifications,
            page_task: &mut self.page_task,
            window_height: self.window_height,
            scroll_offset: &mut self.scroll_offset,
            end_threshold: self.end_threshold,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.overlay.gallery() {
            Some(gallery) => format!("{} - {app_name}", gallery.album_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.overlay.is_open()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AlbumList(message) => {
                update::handle_album_list_message(&mut self.update_context(), message)
            }
            Message::Gallery(message) => {
                update::handle_gallery_message(&mut self.update_context(), message)
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::PageLoaded(completion) => {
                update::handle_page_loaded(&mut self.update_context(), completion)
            }
            Message::ImageLoaded { url, result } => {
                update::handle_image_loaded(&mut self.update_context(), url, result)
            }
            Message::WindowResized(size) => {
                self.window_height = size.height;
                update::handle_resized(&mut self.update_context())
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                update::shutdown(&mut self.update_context());
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: ListScreen::from_snapshot(&self.list.snapshot()),
            rows: &self.rows,
            overlay: &self.overlay,
            images: &self.images,
            notifications: &self.notifications,
        })
    }
}
