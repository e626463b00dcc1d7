// src/logging.rs
//! Subscriber setup. Library crates log through `log`; the fmt subscriber's
//! `tracing-log` bridge picks those records up.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count. `RUST_LOG` takes precedence when set.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// # Errors
/// Fails when the filter is malformed or a subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_for(verbosity)).context("building log filter")?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("installing log subscriber")
}
