// SPDX-License-Identifier: MPL-2.0
//! Grid of project cards.
//!
//! Each card shows its current preview image and caption, a strip of
//! thumbnails that swap the preview, and a "View gallery" control when the
//! card declares a gallery. All activations are reported to the gallery
//! component as [`Hit`]s rooted at the card.

use crate::app::i18n::fluent::I18n;
use crate::gallery::{CardPreview, CardPreviews, Hit, ImageState, Message, Region};
use crate::page::{CardId, PageLayout, ProjectCard};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub page: &'a PageLayout,
    pub previews: &'a CardPreviews,
    /// Cards left visible by the category filter.
    pub visible: Vec<CardId>,
}

fn card_region(id: CardId, card: &ProjectCard) -> Region {
    Region::ProjectCard {
        card: id,
        gallery: card.gallery.clone(),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        i18n,
        colors,
        page,
        previews,
        visible,
    } = ctx;
    let cards = visible.into_iter().filter_map(move |id| {
        let card = page.card(id)?;
        let preview = previews.get(id)?;
        Some(view_card(id, card, preview, i18n, colors))
    });

    Row::with_children(cards)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .wrap()
        .into()
}

fn view_card<'a>(
    id: CardId,
    card: &'a ProjectCard,
    preview: &'a CardPreview,
    i18n: &'a I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(view_preview(preview, i18n));

    if let Some(caption) = preview.caption() {
        content = content.push(
            Text::new(caption)
                .size(typography::CAPTION)
                .color(colors.muted_text),
        );
    }

    if preview.len() > 1 {
        content = content.push(view_thumb_strip(id, card, preview));
        content = content.push(
            Text::new(i18n.tr_with_args(
                "card-counter",
                &[
                    ("current", &(preview.active() + 1).to_string()),
                    ("total", &preview.len().to_string()),
                ],
            ))
            .size(typography::CAPTION)
            .color(colors.muted_text),
        );
    }

    content = content
        .push(Text::new(card.title.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(card.summary.as_str())
                .size(typography::BODY)
                .color(colors.muted_text),
        );

    if let Some(label) = category_tag(&card.category) {
        content = content.push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(colors.accent),
        );
    }

    // Cards without a gallery have no open control at all.
    if card.gallery.is_some() {
        content = content.push(
            button(Text::new(i18n.tr("card-view-gallery")))
                .style(styles::button::primary)
                .on_press(Message::Pointer(
                    Hit::new(Region::OpenControl).within(card_region(id, card)),
                )),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn view_preview<'a>(preview: &'a CardPreview, i18n: &'a I18n) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::CARD_PREVIEW_HEIGHT);
    match preview.preview().map(|(_, state)| state) {
        Some(ImageState::Ready(data)) => image(data.handle.clone())
            .content_fit(ContentFit::Cover)
            .opacity(preview.opacity())
            .width(Length::Fill)
            .height(height)
            .into(),
        Some(ImageState::Empty | ImageState::Loading(_)) => {
            placeholder(i18n.tr("card-image-loading"), height)
        }
        Some(ImageState::Failed) | None => {
            placeholder(i18n.tr("card-image-placeholder"), height)
        }
    }
}

fn view_thumb_strip<'a>(
    id: CardId,
    card: &'a ProjectCard,
    preview: &'a CardPreview,
) -> Element<'a, Message> {
    let edge = Length::Fixed(sizing::CARD_THUMB);
    let thumbs = (0..preview.len()).map(|thumb| {
        let content: Element<'a, Message> = match preview.image(thumb) {
            Some(ImageState::Ready(data)) => image(data.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(edge)
                .height(edge)
                .into(),
            _ => Container::new(Text::new(""))
                .width(edge)
                .height(edge)
                .style(styles::container::placeholder)
                .into(),
        };
        let hit = Hit::new(Region::CardThumb { card: id, thumb })
            .within(Region::CardThumbStrip)
            .within(card_region(id, card));

        button(
            Container::new(content)
                .padding(spacing::XXS)
                .style(styles::container::thumbnail(preview.active() == thumb)),
        )
        .padding(0)
        .style(styles::button::frameless)
        .on_press(Message::Pointer(hit))
        .into()
    });

    Row::with_children(thumbs).spacing(spacing::XS).into()
}

fn placeholder<'a>(label: String, height: Length) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

/// Upper-cased category shown under the summary; blank categories show none.
fn category_tag(category: &str) -> Option<String> {
    let trimmed = category.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}
