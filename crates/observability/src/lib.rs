//! Tracing/logging setup shared by embedding applications.
//!
//! The engine crates themselves stay log-free (pure functions have nothing
//! to report); hosts and integration tests call [`init`] once at startup.

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
