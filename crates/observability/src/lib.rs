//! Tracing/logging setup shared by binaries and test suites built on `forgeddd`.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

pub use self::tracing::{init_for_tests, init_with_filter};

/// Tracing configuration (filters, layers).
pub mod tracing;
