//! Logging setup for the friend-graph binary.
//!
//! `FRIEND_GRAPH_LOG` takes an `EnvFilter` directive and wins over the
//! verbosity flag, e.g. `FRIEND_GRAPH_LOG=friend_graph_core=debug`.
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "FRIEND_GRAPH_LOG";

/// Default filter for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
