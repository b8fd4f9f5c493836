// SPDX-License-Identifier: MPL-2.0
//! Shared handle used to record diagnostic events.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticKind};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to the in-memory diagnostics buffer.
///
/// Every recorded event is also emitted as a `tracing` event: error level for
/// [`DiagnosticKind::is_error`] kinds, warning level otherwise.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records an event of the given kind.
    pub fn record(&self, kind: DiagnosticKind, message: impl Into<String>) {
        let event = DiagnosticEvent::new(kind, message);
        if kind.is_error() {
            tracing::error!(kind = %kind, "{}", event.message);
        } else {
            tracing::warn!(kind = %kind, "{}", event.message);
        }
        self.lock().push(event);
    }

    pub fn configuration_missing(&self, message: impl Into<String>) {
        self.record(DiagnosticKind::ConfigurationMissing, message);
    }

    pub fn lookup_miss(&self, message: impl Into<String>) {
        self.record(DiagnosticKind::LookupMiss, message);
    }

    pub fn asset_load_failure(&self, message: impl Into<String>) {
        self.record(DiagnosticKind::AssetLoadFailure, message);
    }

    pub fn ignored_request(&self, message: impl Into<String>) {
        self.record(DiagnosticKind::IgnoredRequest, message);
    }

    /// Returns a snapshot of the buffered events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.lock().iter().cloned().collect()
    }

    /// Number of buffered events of `kind`.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.lock().iter().filter(|event| event.kind == kind).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave the buffer half-written,
    // so a poisoned mutex is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, CircularBuffer<DiagnosticEvent>> {
        self.buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
