//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Initialize tracing. Users can install their own subscriber; this helper
/// installs a default `RUST_LOG`-driven subscriber if none is set.
pub fn init_tracing() {
    install(EnvFilter::from_default_env());
}

/// Initialize tracing with an explicit filter directive such as
/// `"race_timeout=debug"`. Falls back to `RUST_LOG` if the directive is invalid.
pub fn init_tracing_with(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::from_default_env());
    install(filter);
}

fn install(filter: EnvFilter) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
