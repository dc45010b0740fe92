//! Logging setup for the CLI.
//!
//! `pave_core` only emits `tracing` events; this is the one place a
//! subscriber is installed.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging to stderr.
///
/// # Environment
/// - `RUST_LOG`: level filter (default: `info`),
///   e.g. `RUST_LOG=pave_core=debug` to see solver progress
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
