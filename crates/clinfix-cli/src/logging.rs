//! Logging setup using `tracing-subscriber`.
//!
//! Library events go to stderr so they never mix with report output.
//! `RUST_LOG` overrides the level chosen from the command line.

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `--verbose` is not given.
const DEFAULT_LEVEL: Level = Level::WARN;

/// Pick the log level for the given verbosity flag.
pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { DEFAULT_LEVEL }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(verbose: bool) {
    let filter = build_env_filter(level_for(verbose));
    let layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // Already installed when called twice.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn build_env_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,clinfix={level},clinfix_cli={level}")))
}
