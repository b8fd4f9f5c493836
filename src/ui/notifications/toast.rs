// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let glyph = Text::new(glyph(notification.severity()))
            .size(typography::BODY_LG)
            .color(accent);

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_style);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Text::new(notification.message(i18n))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(dismiss);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| frame_style(theme, accent))
            .into()
    }

    /// Visible toasts stacked in the bottom-right corner, newest on top.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let column = manager.visible().fold(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
            |column, notification| column.push(Self::view(notification, i18n)),
        );

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Warning | Severity::Error => "⚠",
    }
}

/// Theme background with a border in the severity color.
fn frame_style(theme: &Theme, accent: Color) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;
    let tint = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => tint(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => tint(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_takes_severity_color() {
        let style = frame_style(&Theme::Dark, Severity::Error.color());
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn dismiss_is_tinted_only_on_interaction() {
        assert!(dismiss_style(&Theme::Light, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_style(&Theme::Light, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn warnings_and_errors_share_glyph() {
        assert_eq!(glyph(Severity::Warning), glyph(Severity::Error));
        assert_ne!(glyph(Severity::Info), glyph(Severity::Error));
    }
}
