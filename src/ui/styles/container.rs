// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Placeholder behind a cover thumbnail that has not loaded.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Status line below the last row.
pub fn footer(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Footer variant shown after a failed fetch.
pub fn footer_error(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..footer(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_error_keeps_footer_background() {
        let theme = Theme::Dark;
        assert_eq!(footer_error(&theme).background, footer(&theme).background);
        assert_eq!(footer_error(&theme).text_color, Some(palette::ERROR_500));
    }
}
