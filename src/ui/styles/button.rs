// SPDX-License-Identifier: MPL-2.0
//! Button styles.
//!
//! Filled buttons share one shape (small radius, 1px border); they differ
//! by fill and border color per status.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(fill: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let fill = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_100
    };
    filled(fill, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Brand-colored call to action. Also used for the selected entry of a
/// toggle group such as the category filter.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            palette::WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            palette::WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => disabled(theme),
    }
}

pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Neutral entry of a toggle group; hovering outlines it in the brand color.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let dark = theme.extended_palette().is_dark;
    let (fill, hover_fill, text_color) = if dark {
        (palette::GRAY_700, palette::GRAY_400, palette::WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(fill, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            filled(hover_fill, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => disabled(theme),
    }
}

/// Translucent black buttons floating over the gallery (previous, next,
/// close). `alpha_normal` and `alpha_hover` set the fill opacity.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            button::Status::Active | button::Status::Disabled => alpha_normal,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Bare button around a framed thumbnail; the frame carries all styling.
pub fn frameless(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(style: button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn primary_uses_brand_fill() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(fill(style), palette::PRIMARY_500);
    }

    #[test]
    fn filter_entries_are_distinguishable() {
        let on = selected(&Theme::Light, button::Status::Active);
        let off = unselected(&Theme::Light, button::Status::Active);
        assert_ne!(fill(on), fill(off));
    }

    #[test]
    fn unselected_follows_theme_brightness() {
        let light = fill(unselected(&Theme::Light, button::Status::Active));
        let dark = fill(unselected(&Theme::Dark, button::Status::Active));
        assert!(light.r > dark.r);
    }

    #[test]
    fn overlay_darkens_on_hover() {
        let style_fn = overlay(palette::WHITE, 0.4, 0.7);
        let normal = fill(style_fn(&Theme::Dark, button::Status::Active));
        let hover = fill(style_fn(&Theme::Dark, button::Status::Hovered));
        assert!(hover.a > normal.a);
    }
}
