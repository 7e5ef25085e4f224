// SPDX-License-Identifier: MPL-2.0
//! Full-window gallery overlay for one album.
//!
//! Shows the current image scaled to fit, previous/next buttons on the sides,
//! the album name with a close button on top, and a page indicator at the
//! bottom. Keyboard shortcuts are routed by the app subscription.

use crate::application::Gallery;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ImageCache, LoadState};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the gallery overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Next,
    Previous,
}

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub images: &'a ImageCache,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        gallery,
        images,
    } = ctx;

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(gallery.album_name()).size(typography::TITLE_MD))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::MD)),
        )
        .push(Space::new().width(Length::Fill))
        .push(nav_button("✕", Some(Message::Close)));

    let body = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(nav_button(
            "‹",
            gallery.has_previous().then_some(Message::Previous),
        ))
        .push(
            Container::new(current_page(gallery, i18n, images))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(nav_button("›", gallery.has_next().then_some(Message::Next)))
        .height(Length::Fill);

    let mut layout = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(body);

    if let Some(label) = page_indicator(gallery, i18n) {
        layout = layout.push(
            Container::new(
                Container::new(Text::new(label).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator(radius::FULL)),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        );
    }

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop)
        .into()
}

fn current_page<'a>(gallery: &Gallery, i18n: &I18n, images: &ImageCache) -> Element<'a, Message> {
    let Some(url) = gallery.current_image() else {
        return Text::new(i18n.tr("gallery-no-images"))
            .size(typography::BODY)
            .into();
    };

    match images.peek(url) {
        Some(LoadState::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Some(LoadState::Failed { .. }) => Text::new(i18n.tr("gallery-image-failed"))
            .size(typography::BODY)
            .color(palette::ERROR_500)
            .into(),
        Some(LoadState::Loading { .. }) | None => Text::new(i18n.tr("gallery-image-loading"))
            .size(typography::BODY)
            .into(),
    }
}

/// "2 / 5" label, hidden for albums with fewer than two images.
#[must_use]
pub fn page_indicator(gallery: &Gallery, i18n: &I18n) -> Option<String> {
    if gallery.len() < 2 {
        return None;
    }
    let current = (gallery.current() + 1).to_string();
    let total = gallery.len().to_string();
    Some(i18n.tr_with_args(
        "gallery-page-indicator",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
}

/// Round overlay button; disabled when `on_press` is `None`.
fn nav_button<'a>(glyph: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press_maybe(on_press)
    .width(Length::Fixed(sizing::GALLERY_NAV_BUTTON))
    .height(Length::Fixed(sizing::GALLERY_NAV_BUTTON))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::domain::Album;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn page_indicator_is_one_based() {
        let mut gallery = Gallery::from_album(
            &Album::new("B", "cover").with_images(["img1", "img2", "img3"]),
        );
        gallery.next();
        assert_eq!(page_indicator(&gallery, &i18n()).as_deref(), Some("2 / 3"));
    }

    #[test]
    fn single_image_has_no_indicator() {
        let gallery = Gallery::from_album(&Album::new("A", "cover").with_images(["only"]));
        assert_eq!(page_indicator(&gallery, &i18n()), None);
    }
}
