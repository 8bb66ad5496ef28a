//! Tracing/logging initialization.
//!
//! Logs are JSON lines on stdout. `RUST_LOG` overrides the default directive,
//! e.g. `RUST_LOG=holdup_api=debug`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber with `default_directive` as the fallback filter.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok()
}
