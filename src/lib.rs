// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a portfolio project browser built with the Iced GUI framework.
//!
//! Project cards come from an embedded page description. Cards that declare
//! a gallery open it in a modal with a cross-fading main image, a counter and
//! a thumbnail strip. The gallery logic (catalog, controller and input router)
//! is independent of the widgets that render it.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod media;
pub mod page;
pub mod ui;
