//! Tracing/logging initialization.
//!
//! Filtering is configured through `RUST_LOG` (see [`EnvFilter`]) and defaults
//! to `info`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install_json(filter);
}

/// Initialize tracing with explicit filter directives (e.g. `"forgeddd_core=trace"`),
/// ignoring `RUST_LOG`.
///
/// A subscriber that is already installed is left in place.
pub fn init_with_filter(directives: &str) -> Result<(), ParseError> {
    let filter = EnvFilter::try_new(directives)?;
    install_json(filter);
    ::tracing::debug!(directives, "tracing filter configured");
    Ok(())
}

/// Initialize human-readable tracing captured by the test harness.
///
/// Honors `RUST_LOG`; defaults to `debug` so domain diagnostics show up in
/// failing test output.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}

fn install_json(filter: EnvFilter) {
    // JSON logs + timestamps.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
