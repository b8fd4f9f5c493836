// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface derived from the theme background, used for the project
/// cards and the gallery panel.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Frame around a thumbnail; the active one carries the brand outline.
pub fn thumbnail(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let weak = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(weak)),
            border: Border {
                color: if active {
                    palette::PRIMARY_500
                } else {
                    Color::TRANSPARENT
                },
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Neutral block shown where an image is missing or still decoding.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
