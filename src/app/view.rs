// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The album list is always rendered; the gallery overlay and the toast
//! layer are stacked on top of it when present.

use super::Message;
use crate::application::{AlbumRows, ListScreen, Overlay};
use crate::i18n::fluent::I18n;
use crate::infrastructure::ImageCache;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{album_list, gallery};
use iced::widget::{stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: ListScreen,
    pub rows: &'a AlbumRows,
    pub overlay: &'a Overlay,
    pub images: &'a ImageCache,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let list = album_list::view(album_list::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
        rows: ctx.rows,
        images: ctx.images,
    })
    .map(Message::AlbumList);

    let mut layers = stack![Container::new(list)
        .width(Length::Fill)
        .height(Length::Fill)]
    .width(Length::Fill)
    .height(Length::Fill);

    if let Some(current) = ctx.overlay.gallery() {
        layers = layers.push(
            gallery::view(gallery::ViewContext {
                i18n: ctx.i18n,
                gallery: current,
                images: ctx.images,
            })
            .map(Message::Gallery),
        );
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    layers.into()
}
