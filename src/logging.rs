//! Logging init for the command-line tools.
//!
//! The library itself only emits `tracing` events; binaries call [`init`]
//! to print them on stderr.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,linkscope=debug";

/// Initialize logging to stderr, filtered by `RUST_LOG`.
///
/// Call once at startup; panics if a global subscriber is already installed.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
