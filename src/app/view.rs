// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (navbar and project grid) sits at the bottom of a stack. While
//! the gallery surface is visible the modal is layered over it and the page
//! stops reacting to the mouse wheel. Toasts are always drawn last.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::gallery;
use crate::page::{CategoryFilter, PageLayout};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::project_grid;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::widgets::scroll_lock;
use iced::widget::{Column, Container, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub page: &'a PageLayout,
    pub filter: &'a CategoryFilter,
    pub theme_mode: ThemeMode,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = ctx.gallery.controller().map(gallery::Controller::surface);
    let locked = surface.is_some_and(gallery::ModalSurface::is_scroll_locked);

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        categories: ctx.page.categories(),
        filter: ctx.filter,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let grid = project_grid::view(project_grid::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        page: ctx.page,
        previews: ctx.gallery.previews(),
        visible: ctx.filter.visible_cards(ctx.page),
    })
    .map(Message::Gallery);

    let page = Column::new()
        .push(navbar)
        .push(scroll_lock(
            Scrollable::new(grid).width(Length::Fill).height(Length::Fill),
            locked,
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(surface) = surface.filter(|surface| surface.is_visible()) {
        layers = layers.push(
            gallery::view::view(
                surface,
                gallery::view::ViewContext {
                    i18n: ctx.i18n,
                    colors: ctx.colors,
                },
            )
            .map(Message::Gallery),
        );
    }

    layers = layers.push(
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
    );

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
