// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern. The
//! gallery modal itself lives in [`crate::gallery::view`]; this module holds
//! the page around it and the shared styling.
//!
//! - [`navbar`] - Section heading, category filter and theme toggle
//! - [`project_grid`] - Project cards with their previews
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`widgets`] - Custom widgets (page scroll lock)

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod project_grid;
pub mod styles;
pub mod theming;
pub mod widgets;
