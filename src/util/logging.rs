//! Diagnostic logging to stderr.
//!
//! Verbosity comes from the `-v` flag only. Password values are never logged.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a tracing filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::new(format!("passkeep={}", level_for(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
