//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with a front-end's stdout.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    ::tracing::debug!("tracing initialized");
}
