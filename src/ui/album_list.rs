// SPDX-License-Identifier: MPL-2.0
//! Scrollable album list with an infinite-scroll footer.
//!
//! The component is stateless: rows come from [`AlbumRows`], the overall
//! layout from [`ListScreen`], and cover images from the session
//! [`ImageCache`]. Scroll positions are reported as [`ScrollMetrics`] so the
//! app can decide when to request the next page.

use crate::application::{AlbumRow, AlbumRows, FooterStatus, ListScreen};
use crate::domain::RowKey;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ImageCache, LoadState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, image, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::ops::Range;

/// Messages emitted by the album list.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(ScrollMetrics),
    Select(RowKey),
    Retry,
}

/// Vertical geometry of the list at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        }
    }

    /// Distance between the bottom of the viewport and the end of the
    /// content. Never negative.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        (self.content_height - (self.offset_y + self.viewport_height)).max(0.0)
    }

    /// True once the viewport is within `threshold` pixels of the end.
    #[must_use]
    pub fn is_near_end(&self, threshold: f32) -> bool {
        self.remaining() <= threshold
    }
}

/// True when `row_count` rows cannot fill a viewport of `viewport_height`,
/// so no scroll event would ever ask for more.
#[must_use]
pub fn needs_more_to_fill(row_count: usize, viewport_height: f32, threshold: f32) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let content_height = row_count as f32 * (sizing::ROW_HEIGHT + spacing::XS);
    content_height <= viewport_height + threshold
}

/// Rows intersecting a viewport scrolled to `offset_y`, widened by one row on
/// each side and clamped to `row_count`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn visible_rows(offset_y: f32, viewport_height: f32, row_count: usize) -> Range<usize> {
    let pitch = sizing::ROW_HEIGHT + spacing::XS;
    let top = (offset_y - spacing::MD).max(0.0);
    let bottom = (offset_y + viewport_height - spacing::MD).max(0.0);

    let end = ((bottom / pitch).ceil() as usize + 1).min(row_count);
    let start = ((top / pitch).floor() as usize).saturating_sub(1).min(end);
    start..end
}

/// Context required to render the album list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: ListScreen,
    pub rows: &'a AlbumRows,
    pub images: &'a ImageCache,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        screen,
        rows,
        images,
    } = ctx;

    match screen {
        ListScreen::Loading => centered(Text::new(i18n.tr("list-loading")).size(typography::BODY)),
        ListScreen::Empty => centered(Text::new(i18n.tr("list-empty")).size(typography::BODY)),
        ListScreen::Failed(err) => centered(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("list-load-failed")).size(typography::TITLE_SM))
                .push(Text::new(error_text(i18n, &err)).size(typography::BODY))
                .push(retry_button(i18n)),
        ),
        ListScreen::List { footer } => {
            let content = rows
                .rows()
                .iter()
                .fold(Column::new().spacing(spacing::XS), |column, row| {
                    column.push(view_row(row, i18n, images))
                })
                .push(view_footer(footer, i18n))
                .padding(spacing::MD)
                .max_width(sizing::LIST_MAX_WIDTH);

            Scrollable::new(
                Container::new(content)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .on_scroll(|viewport| Message::Scrolled(ScrollMetrics::from_viewport(&viewport)))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        }
    }
}

fn view_row<'a>(row: &'a AlbumRow, i18n: &'a I18n, images: &'a ImageCache) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match images.peek(&row.cover_url) {
        Some(LoadState::Loaded(handle)) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(ContentFit::Cover)
            .into(),
        _ => Container::new(Space::new())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    let count = row.image_count.to_string();
    let count_label = if row.image_count == 1 {
        i18n.tr("list-image-count-one")
    } else {
        i18n.tr_with_args("list-image-count", &[("count", count.as_str())])
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(row.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(count_label).size(typography::CAPTION));

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(thumbnail)
        .push(details);

    button(content)
        .on_press(Message::Select(row.key))
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ROW_HEIGHT))
        .style(styles::button::album_row)
        .into()
}

fn view_footer(footer: FooterStatus, i18n: &I18n) -> Element<'_, Message> {
    let content: Element<'_, Message> = match footer {
        FooterStatus::Hidden => return Space::new().height(Length::Fixed(spacing::XS)).into(),
        FooterStatus::Loading => Text::new(i18n.tr("list-loading-more"))
            .size(typography::BODY)
            .into(),
        FooterStatus::EndOfList => Text::new(i18n.tr("list-end-of-list"))
            .size(typography::BODY)
            .into(),
        FooterStatus::Error(err) => {
            return Container::new(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        Container::new(Text::new(error_text(i18n, &err)).size(typography::BODY))
                            .width(Length::Fill),
                    )
                    .push(retry_button(i18n)),
            )
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::footer_error)
            .into();
        }
    };

    Container::new(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

fn retry_button(i18n: &I18n) -> Element<'_, Message> {
    button(Text::new(i18n.tr("list-retry")).size(typography::BODY))
        .on_press(Message::Retry)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .into()
}

/// Localized error message with its first detail appended.
pub fn error_text(i18n: &I18n, err: &Error) -> String {
    i18n.tr_with_args(err.i18n_key(), &[("detail", err.detail().as_str())])
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
