// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording recoverable problems.
//!
//! Missing page configuration, unknown gallery ids, failed image loads and
//! ignored requests are never fatal. They are recorded here so tests and the
//! application can inspect them, and mirrored to `tracing`.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with bounded capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticKind`]
//! - [`DiagnosticsHandle`]: Cloneable, shared access to the buffer

mod buffer;
mod events;
mod handle;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticKind};
pub use handle::DiagnosticsHandle;
