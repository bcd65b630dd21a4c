//! Structured logging through `tracing`.
//!
//! Everything goes to stderr so that CLI output on stdout stays clean for
//! piping. `RUST_LOG`, when set, takes precedence over the configured filter.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Calling it again is a no-op, which keeps
/// tests and repeated CLI setup from panicking.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
