// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation files are embedded in the
//! binary from `assets/i18n/`, one `<locale>.ftl` file per language.
//!
//! # Locale Resolution
//!
//! 1. `--lang` CLI argument
//! 2. `[general] language` in `settings.toml`
//! 3. Operating system locale
//! 4. `en-US`

pub mod fluent;
