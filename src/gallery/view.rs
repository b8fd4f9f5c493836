// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery modal.
//!
//! The view only reads the [`ModalSurface`]. Controls and thumbnails report
//! their activation as a [`Hit`] carrying the regions that contain them, so
//! the router sees the same nesting the widgets are built with:
//!
//! ```text
//! Backdrop
//! └── ModalPanel
//!     ├── CloseControl / PrevControl / NextControl
//!     └── ModalThumb { declared_index }
//! ```

use super::router::{Hit, Region};
use super::surface::{ImageState, MainImage, ModalSurface, ThumbSlot};
use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::page::Anchor;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, image, mouse_area, opaque, tooltip, Column, Container, Id, Row, Scrollable, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Id of the modal thumbnail strip, the only scrollable a reveal may move.
pub const THUMBNAIL_STRIP_ID: &str = "gallery-thumbnail-strip";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

fn in_panel(region: Region) -> Hit {
    Hit::new(region)
        .within(Region::ModalPanel)
        .within(Region::Backdrop)
}

fn pointer(region: Region) -> Message {
    Message::Pointer(in_panel(region))
}

/// Renders the modal over the whole window. Callers only draw it while the
/// surface is visible.
pub fn view<'a>(surface: &'a ModalSurface, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(spacing::MD).width(Length::Fill);

    content = content.push(view_header(surface, &ctx));

    if let Some(main) = surface.main_image() {
        content = content.push(view_stage(surface, main, &ctx));
    }

    if let Some(description) = surface.description() {
        content = content.push(
            Text::new(description)
                .size(typography::BODY)
                .width(Length::Fill),
        );
    }

    if surface.has(Anchor::Thumbnails) {
        content = content.push(view_thumbnails(surface.thumbnails(), &ctx));
    }

    let panel = Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::MODAL_WIDTH)
        .style(styles::container::panel);

    // Presses on the panel are consumed here so they never reach the backdrop.
    let panel = mouse_area(panel).on_press(Message::Pointer(
        Hit::new(Region::ModalPanel).within(Region::Backdrop),
    ));

    let backdrop = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::backdrop(ctx.colors));

    opaque(mouse_area(backdrop).on_press(Message::Pointer(Hit::new(Region::Backdrop))))
}

fn view_header<'a>(surface: &'a ModalSurface, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(surface.title().unwrap_or_default())
        .size(typography::TITLE_MD)
        .width(Length::Fill);

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title);

    if let Some(counter) = view_counter(surface) {
        header = header.push(counter);
    }

    if surface.has(Anchor::Close) {
        header = header.push(control_button(
            "×",
            ctx.i18n.tr("gallery-close"),
            Region::CloseControl,
        ));
    }

    header.into()
}

/// "current / total", with either half left out when it is not anchored.
fn view_counter<'a>(surface: &ModalSurface) -> Option<Element<'a, Message>> {
    let text = match (surface.current(), surface.total()) {
        (Some(current), Some(total)) => format!("{current} / {total}"),
        (Some(current), None) => current.to_string(),
        (None, Some(total)) => format!("/ {total}"),
        (None, None) => return None,
    };
    Some(
        Container::new(Text::new(text).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator(radius::FULL))
            .into(),
    )
}

fn view_stage<'a>(
    surface: &'a ModalSurface,
    main: &'a MainImage,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    // While a new source decodes, the outgoing image stays up at the dimmed
    // opacity.
    let picture: Element<'a, Message> = match (main.state.displayed(), &main.state) {
        (Some(data), _) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(main.opacity)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (None, ImageState::Failed) => {
            placeholder(ctx.i18n.tr("gallery-image-unavailable"), Length::Fill)
        }
        (None, _) => placeholder(String::new(), Length::Fill),
    };

    let mut stage = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT));

    if surface.has(Anchor::Previous) {
        stage = stage.push(control_button(
            "◀",
            ctx.i18n.tr("gallery-previous"),
            Region::PrevControl,
        ));
    }
    stage = stage.push(Container::new(picture).width(Length::Fill).height(Length::Fill));
    if surface.has(Anchor::Next) {
        stage = stage.push(control_button(
            "▶",
            ctx.i18n.tr("gallery-next"),
            Region::NextControl,
        ));
    }

    stage.into()
}

fn view_thumbnails<'a>(slots: &'a [ThumbSlot], ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let strip = slots.iter().fold(
        Row::new().spacing(spacing::XS).padding(spacing::XXS),
        |row, slot| row.push(view_thumbnail(slot, ctx)),
    );

    Scrollable::new(strip)
        .id(Id::new(THUMBNAIL_STRIP_ID))
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new().width(4.0).scroller_width(4.0)))
        .into()
}

fn view_thumbnail<'a>(slot: &'a ThumbSlot, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let edge = Length::Fixed(sizing::MODAL_THUMB);
    let content: Element<'a, Message> = match &slot.state {
        ImageState::Ready(data) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(edge)
            .height(edge)
            .into(),
        _ => placeholder(ctx.i18n.tr("gallery-thumbnail-placeholder"), edge),
    };

    let framed = Container::new(content)
        .padding(spacing::XXS)
        .style(styles::container::thumbnail(slot.active));

    button(framed)
        .padding(0)
        .style(styles::button::frameless)
        .on_press(pointer(Region::ModalThumb {
            declared_index: slot.index.to_string(),
        }))
        .into()
}

fn control_button<'a>(glyph: &'a str, label: String, region: Region) -> Element<'a, Message> {
    let glyph = Text::new(glyph)
        .size(typography::TITLE_SM)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let control = button(glyph)
        .width(Length::Fixed(sizing::CONTROL_HIT_SIZE))
        .height(Length::Fixed(sizing::CONTROL_HIT_SIZE))
        .style(styles::button::overlay(palette::WHITE, 0.4, 0.7))
        .on_press(pointer(region));

    styles::tooltip::styled(control, label, tooltip::Position::Bottom).into()
}

fn placeholder<'a>(label: String, size: Length) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(size)
        .height(size)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
