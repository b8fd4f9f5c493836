// SPDX-License-Identifier: MPL-2.0
//! Top bar of the portfolio page: section title, category filter and theme
//! toggle.

use crate::app::i18n::fluent::I18n;
use crate::page::CategoryFilter;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub categories: Vec<&'a str>,
    pub filter: &'a CategoryFilter,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    SelectFilter(CategoryFilter),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ThemeChanged(ThemeMode),
    FilterChanged(CategoryFilter),
}

/// Applies a navbar message to the page-level state it controls.
pub fn update(message: Message, theme_mode: &mut ThemeMode, filter: &mut CategoryFilter) -> Event {
    match message {
        Message::ToggleTheme => {
            *theme_mode = theme_mode.next();
            Event::ThemeChanged(*theme_mode)
        }
        Message::SelectFilter(selected) => {
            if *filter == selected {
                return Event::None;
            }
            *filter = selected.clone();
            Event::FilterChanged(selected)
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("navbar-projects"))
        .size(typography::TITLE_LG)
        .width(Length::Fill);

    let mut filters = Row::new().spacing(spacing::XS).push(filter_button(
        ctx.i18n.tr("filter-all"),
        CategoryFilter::All,
        ctx.filter,
    ));
    for category in &ctx.categories {
        filters = filters.push(filter_button(
            category_label(ctx.i18n, category),
            CategoryFilter::Only((*category).to_string()),
            ctx.filter,
        ));
    }

    let theme_button = button(Text::new(ctx.i18n.tr(ctx.theme_mode.i18n_key())))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::unselected);

    Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(heading)
        .push(filters)
        .push(theme_button)
        .into()
}

fn filter_button<'a>(
    label: String,
    target: CategoryFilter,
    current: &CategoryFilter,
) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if *current == target {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    button(Text::new(label))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(Message::SelectFilter(target))
        .into()
}

/// Translated name of a category, falling back to the raw category name.
fn category_label(i18n: &I18n, category: &str) -> String {
    let key = format!("category-{category}");
    let label = i18n.tr(&key);
    if label.starts_with("MISSING:") {
        category.to_string()
    } else {
        label
    }
}
