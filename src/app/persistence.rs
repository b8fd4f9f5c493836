// SPDX-License-Identifier: MPL-2.0
//! Saving visitor preferences to disk.

use super::config::{self, Config};
use crate::ui::notifications::Notification;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Writes the chosen theme mode into the settings file.
///
/// Returns the notification to show when the file could not be written.
/// Skipped under test so unit tests never touch the user's settings.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Option<Notification> {
    if cfg!(test) {
        return None;
    }
    persist_theme_mode_with_override(theme_mode, None)
}

pub(super) fn persist_theme_mode_with_override(
    theme_mode: ThemeMode,
    base_dir: Option<PathBuf>,
) -> Option<Notification> {
    let (mut cfg, _) = config::load_with_override(base_dir.clone());
    cfg.general.theme_mode = theme_mode;
    save(&cfg, base_dir)
}

fn save(cfg: &Config, base_dir: Option<PathBuf>) -> Option<Notification> {
    match config::save_with_override(cfg, base_dir) {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(%error, "failed to save settings");
            Some(Notification::error("notification-config-save-error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn theme_mode_is_written_to_settings() {
        let dir = tempdir().expect("temp dir");
        let base = Some(dir.path().to_path_buf());

        assert!(persist_theme_mode_with_override(ThemeMode::Dark, base.clone()).is_none());

        let (cfg, warning) = config::load_with_override(base);
        assert!(warning.is_none());
        assert_eq!(cfg.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unwritable_settings_produce_notification() {
        let dir = tempdir().expect("temp dir");
        // A regular file where the settings directory should be.
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, b"").expect("write blocker");

        let notification = persist_theme_mode_with_override(ThemeMode::Light, Some(blocker));
        assert_eq!(
            notification.map(|n| n.message_key().to_string()).as_deref(),
            Some("notification-config-save-error")
        );
    }
}
