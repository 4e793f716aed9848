//! Tracing/logging setup shared by the service binary and tests.

/// Initialize process-wide tracing with the given output format.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use crate::tracing::{LogFormat, UnknownLogFormat};
