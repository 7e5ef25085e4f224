// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler works on an [`UpdateContext`] borrowing the parts of the app
//! it may touch, and returns the follow-up [`Task`].

use super::Message;
use crate::application::{
    AlbumRows, FetchCompletion, Overlay, PaginatedListSource, Transition,
};
use crate::error::Error;
use crate::infrastructure::{ImageCache, ImageFetcher, LoadState};
use crate::ui::album_list::{self, ScrollMetrics};
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use iced::task;
use iced::Task;
use std::ops::Range;
use tracing::{debug, info};

/// Number of gallery images fetched ahead of and behind the current one.
const GALLERY_PREFETCH: usize = 1;

/// Mutable view of the app state used by the handlers.
pub struct UpdateContext<'a> {
    pub list: &'a mut PaginatedListSource,
    pub rows: &'a mut AlbumRows,
    pub overlay: &'a mut Overlay,
    pub images: &'a mut ImageCache,
    pub image_fetcher: Option<&'a ImageFetcher>,
    pub notifications: &'a mut notifications::Manager,
    pub page_task: &'a mut Option<task::Handle>,
    /// Height the list can occupy; the list fills the window.
    pub window_height: f32,
    pub scroll_offset: &'a mut f32,
    pub end_threshold: f32,
}

/// Starts the next page fetch if the controller allows one.
///
/// The task is abortable; its handle is kept so teardown can stop it.
pub fn request_next_page(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(pending) = ctx.list.request_next_page() else {
        return Task::none();
    };
    let (task, handle) = Task::perform(pending.run(), Message::PageLoaded).abortable();
    *ctx.page_task = Some(handle);
    task
}

pub fn handle_album_list_message(
    ctx: &mut UpdateContext<'_>,
    message: album_list::Message,
) -> Task<Message> {
    match message {
        album_list::Message::Scrolled(metrics) => handle_scrolled(ctx, metrics),
        album_list::Message::Retry => {
            debug!("retry requested");
            request_next_page(ctx)
        }
        album_list::Message::Select(key) => {
            let Some(album) = ctx.list.items().get(key.index()) else {
                return Task::none();
            };
            info!(album = %album.name, images = album.image_count(), "opening gallery");
            ctx.overlay.select(album);
            prefetch_gallery(ctx)
        }
    }
}

fn handle_scrolled(ctx: &mut UpdateContext<'_>, metrics: ScrollMetrics) -> Task<Message> {
    *ctx.scroll_offset = metrics.offset_y;
    let visible =
        album_list::visible_rows(metrics.offset_y, metrics.viewport_height, ctx.rows.len());
    let covers = refresh_visible_covers(ctx, visible);

    if metrics.is_near_end(ctx.end_threshold) {
        Task::batch([covers, request_next_page(ctx)])
    } else {
        covers
    }
}

/// Handles a new window size: reloads evicted covers for the rows now on
/// screen and tops the list up if it no longer fills the window.
pub fn handle_resized(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let visible =
        album_list::visible_rows(*ctx.scroll_offset, ctx.window_height, ctx.rows.len());
    let covers = refresh_visible_covers(ctx, visible);

    let state = ctx.list.state();
    let can_grow = state.is_ready() && state.last_error().is_none();
    if can_grow
        && album_list::needs_more_to_fill(ctx.rows.len(), ctx.window_height, ctx.end_threshold)
    {
        Task::batch([covers, request_next_page(ctx)])
    } else {
        covers
    }
}

pub fn handle_page_loaded(ctx: &mut UpdateContext<'_>, completion: FetchCompletion) -> Task<Message> {
    let transition = ctx.list.complete(completion);
    if transition != Transition::Ignored {
        *ctx.page_task = None;
    }

    match transition {
        Transition::Appended { .. } => {
            let changed = ctx.rows.sync(ctx.list.items());
            ctx.notifications.clear_fetch_errors();

            let covers: Vec<String> = changed
                .iter()
                .filter_map(|key| ctx.rows.get(*key))
                .map(|row| row.cover_url.clone())
                .collect();
            let mut tasks: Vec<Task<Message>> = covers
                .into_iter()
                .map(|url| fetch_image(ctx, url))
                .collect();

            if album_list::needs_more_to_fill(
                ctx.rows.len(),
                ctx.window_height,
                ctx.end_threshold,
            ) {
                tasks.push(request_next_page(ctx));
            }
            Task::batch(tasks)
        }
        Transition::EndReached | Transition::Ignored => Task::none(),
        Transition::Failed(err) => {
            ctx.notifications.push(Notification::page_fetch_failed(&err));
            Task::none()
        }
    }
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match message {
        gallery::Message::Close => {
            ctx.overlay.close();
            Task::none()
        }
        gallery::Message::Next => {
            if let Some(gallery) = ctx.overlay.gallery_mut() {
                gallery.next();
            }
            prefetch_gallery(ctx)
        }
        gallery::Message::Previous => {
            if let Some(gallery) = ctx.overlay.gallery_mut() {
                gallery.previous();
            }
            prefetch_gallery(ctx)
        }
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    ctx.images.finish(url, result);
    Task::none()
}

/// Aborts the in-flight page fetch and forgets it in the controller.
pub fn shutdown(ctx: &mut UpdateContext<'_>) {
    if let Some(handle) = ctx.page_task.take() {
        handle.abort();
    }
    if ctx.list.cancel() {
        info!("cancelled pending album request on shutdown");
    }
}

/// Fetches the current gallery image and its neighbours.
fn prefetch_gallery(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(gallery) = ctx.overlay.gallery() else {
        return Task::none();
    };
    let start = gallery.current().saturating_sub(GALLERY_PREFETCH);
    let end = (gallery.current() + GALLERY_PREFETCH + 1).min(gallery.len());
    let urls: Vec<String> = gallery.images()[start..end].to_vec();

    Task::batch(urls.into_iter().map(|url| fetch_image(ctx, url)))
}

/// Marks the covers of `rows` as recently used and downloads the ones that
/// are missing from the cache or failed with attempts left.
fn refresh_visible_covers(ctx: &mut UpdateContext<'_>, rows: Range<usize>) -> Task<Message> {
    let images = &mut *ctx.images;
    let missing: Vec<String> = ctx.rows.rows()[rows]
        .iter()
        .filter(|row| {
            !matches!(
                images.get(&row.cover_url),
                Some(LoadState::Loading { .. } | LoadState::Loaded(_))
            )
        })
        .map(|row| row.cover_url.clone())
        .collect();

    Task::batch(missing.into_iter().map(|url| fetch_image(ctx, url)))
}

fn fetch_image(ctx: &mut UpdateContext<'_>, url: String) -> Task<Message> {
    let Some(fetcher) = ctx.image_fetcher else {
        return Task::none();
    };
    if !ctx.images.begin(&url) {
        return Task::none();
    }
    let request_url = url.clone();
    Task::perform(fetcher.clone().fetch(request_url), move |result| {
        Message::ImageLoaded { url, result }
    })
}
