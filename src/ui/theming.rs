// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the colors each mode resolves to.
//!
//! The `System` mode asks the desktop through `dark-light` once, when the
//! theme is built, so a running session keeps a stable look.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors the page and the gallery modal draw with, beyond iced's palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    /// Dimmed layer behind the gallery panel.
    pub backdrop: Color,
    /// Category tags and other brand accents.
    pub accent: Color,
    /// Secondary text such as card summaries and counters.
    pub muted_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            accent: palette::PRIMARY_600,
            muted_text: palette::GRAY_700,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            backdrop: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            accent: palette::PRIMARY_400,
            muted_text: palette::GRAY_200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether this mode ends up dark. `System` follows the desktop and
    /// falls back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Mode selected by the next press of the navbar theme toggle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "navbar-theme-light",
            ThemeMode::Dark => "navbar-theme-dark",
            ThemeMode::System => "navbar-theme-system",
        }
    }
}

/// Active theme: the chosen mode and what it resolved to.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub mode: ThemeMode,
    pub colors: ColorScheme,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self::resolved(mode, mode.is_dark())
    }

    fn resolved(mode: ThemeMode, dark: bool) -> Self {
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { mode, colors, dark }
    }

    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    }

    #[test]
    fn explicit_modes_pick_matching_iced_theme() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), iced::Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), iced::Theme::Dark);
    }

    #[test]
    fn resolved_system_mode_keeps_its_mode() {
        let theme = AppTheme::resolved(ThemeMode::System, false);
        assert_eq!(theme.mode, ThemeMode::System);
        assert_eq!(theme.colors, ColorScheme::light());
    }

    #[test]
    fn dark_backdrop_is_denser() {
        assert!(ColorScheme::dark().backdrop.a > ColorScheme::light().backdrop.a);
    }

    #[test]
    fn mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(text.trim(), "mode = \"dark\"");
    }
}
