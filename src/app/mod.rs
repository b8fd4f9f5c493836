// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the gallery.
//!
//! The `App` struct wires together the embedded content, the gallery
//! component, localization and settings, and turns gallery effects into
//! iced tasks (timers, background decodes, scrolling, toasts).

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::diagnostics::DiagnosticsHandle;
use crate::error;
use crate::gallery::{self, ControllerSettings};
use crate::media::ThumbnailCache;
use crate::page::{CategoryFilter, PageLayout};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{AppTheme, ThemeMode};
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;

/// Longest edge of decoded card preview images.
pub const CARD_IMAGE_EDGE_PX: u32 = 480;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Root application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    page: PageLayout,
    filter: CategoryFilter,
    gallery: gallery::State,
    /// Root image sources are resolved against.
    assets_dir: PathBuf,
    thumbnails: ThumbnailCache,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode)
            .field("filter", &self.filter)
            .field("gallery_open", &self.gallery.is_open())
            .field("assets_dir", &self.assets_dir)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Falls back to `fallback` when embedded content is unusable, recording
/// the problem and queuing a warning toast.
fn or_report<T>(
    result: error::Result<T>,
    fallback: impl FnOnce() -> T,
    diagnostics: &DiagnosticsHandle,
    notifications: &mut notifications::Manager,
) -> T {
    result.unwrap_or_else(|error| {
        diagnostics.configuration_missing(error.to_string());
        notifications.push(Notification::warning(error.i18n_key()));
        fallback()
    })
}

impl App {
    /// Loads settings and embedded content, then requests the card previews
    /// and, when `--gallery` was given, opens that gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let diagnostics = DiagnosticsHandle::default();
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let catalog = or_report(
            Catalog::embedded(),
            Catalog::empty,
            &diagnostics,
            &mut notifications,
        );
        let page = or_report(
            PageLayout::embedded(),
            PageLayout::default,
            &diagnostics,
            &mut notifications,
        );
        tracing::info!(
            galleries = catalog.len(),
            cards = page.cards.len(),
            modal = page.modal.is_some(),
            "content loaded"
        );

        let gallery = gallery::State::new(
            catalog,
            &page,
            ControllerSettings::from(&config.gallery),
            diagnostics,
        );

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            page,
            filter: CategoryFilter::All,
            gallery,
            assets_dir: paths::get_assets_dir(config.gallery.assets_dir.as_deref()),
            thumbnails: ThumbnailCache::new(config.gallery.thumbnail_cache_entries()),
            notifications,
        };

        let mut effects = app.gallery.load_previews();
        if let Some(id) = flags.gallery.as_deref() {
            effects.extend(app.gallery.open(id));
        }
        let task = app.run_effects(effects);
        (app, task)
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        match self
            .gallery
            .controller()
            .and_then(|controller| controller.state().active())
        {
            Some(active) => format!("{} · {base}", active.gallery.title()),
            None => base,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.theme.colors,
            page: &self.page,
            filter: &self.filter,
            theme_mode: self.theme_mode(),
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}
