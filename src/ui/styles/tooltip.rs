// SPDX-License-Identifier: MPL-2.0
//! Tooltips naming the icon-only gallery controls.

use crate::ui::design_tokens::{opacity, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted surface: light tooltip on dark themes and the reverse.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let inverted = palette.background.base.text;
    let text_color = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..inverted
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
