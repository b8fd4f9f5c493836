// SPDX-License-Identifier: MPL-2.0
//! A single toast: what to say, how loudly, and for how long.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    /// Recoverable setup problems: unreadable settings, page or catalog.
    Warning,
    /// Failed user requests, such as opening an unknown gallery. Stays until
    /// dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// How long a toast of this severity stays on screen by default.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

/// A toast whose text is a translation key resolved at render time, so a
/// language change also retranslates toasts already on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: String,
    args: Vec<(String, String)>,
    created_at: Instant,
    lifetime: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
            args: Vec::new(),
            created_at: Instant::now(),
            lifetime: severity.lifetime(),
        }
    }

    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    /// Replaces the severity's default lifetime.
    #[must_use]
    pub fn auto_dismiss(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    /// Translated message text.
    #[must_use]
    pub fn message(&self, i18n: &I18n) -> String {
        if self.args.is_empty() {
            return i18n.tr(&self.key);
        }
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.key, &args)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.lifetime
            .is_some_and(|lifetime| self.created_at.elapsed() >= lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn ids_are_unique() {
        assert_ne!(Notification::info("a").id(), Notification::info("a").id());
    }

    #[test]
    fn errors_stay_until_dismissed() {
        assert!(Severity::Error.lifetime().is_none());
        assert!(!Notification::error("notification-gallery-not-found").is_expired());
    }

    #[test]
    fn warnings_outlive_info() {
        assert!(Severity::Warning.lifetime() > Severity::Info.lifetime());
    }

    #[test]
    fn explicit_lifetime_wins() {
        assert!(Notification::error("x")
            .auto_dismiss(Duration::ZERO)
            .is_expired());
    }

    #[test]
    fn message_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let text = Notification::error("notification-gallery-not-found")
            .with_arg("id", "kainimo")
            .message(&i18n);
        assert!(text.contains("kainimo"), "{text}");
    }
}
