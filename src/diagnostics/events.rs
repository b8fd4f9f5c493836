// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Every event belongs to one of a small number of kinds. None of them is
//! fatal: the code that raises an event has already recovered locally.

use chrono::{DateTime, Utc};
use std::fmt;

/// Category of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A required part of the page or catalog is absent, so a feature is disabled.
    ConfigurationMissing,
    /// A gallery id was requested that the catalog does not contain.
    LookupMiss,
    /// An image asset could not be read or decoded.
    AssetLoadFailure,
    /// A request was ignored because it did not apply to the current state
    /// (index out of range, no active gallery, unparseable thumbnail index).
    IgnoredRequest,
}

impl DiagnosticKind {
    /// Whether this kind is reported at error level.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::ConfigurationMissing | Self::AssetLoadFailure)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConfigurationMissing => "configuration-missing",
            Self::LookupMiss => "lookup-miss",
            Self::AssetLoadFailure => "asset-load-failure",
            Self::IgnoredRequest => "ignored-request",
        };
        f.write_str(name)
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.kind,
            self.message
        )
    }
}
