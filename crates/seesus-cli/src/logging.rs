//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise `-v` raises the level one step per
//! flag, and with no flags the config file's `log_level` applies.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity and configured default
pub fn level_directive(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr so stdout stays parseable
pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
