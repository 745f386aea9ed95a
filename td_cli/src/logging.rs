//! Logging setup for the command-line draw.
//!
//! Logs go to stderr so stdout carries only the JSON result. Library
//! records emitted through `log` are picked up by the subscriber's log
//! bridge.

use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging
///
/// Log levels are configurable via the `RUST_LOG` env var (default: `info`).
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`
pub fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Log how a draw went
pub fn log_draw(roster: &str, seed_used: i64, attempts: u32, duration_ms: u64) {
    if attempts > 100 {
        tracing::warn!(
            roster = roster,
            seed_used = seed_used,
            attempts = attempts,
            duration_ms = duration_ms,
            "Draw needed many attempts"
        );
    } else {
        tracing::info!(
            roster = roster,
            seed_used = seed_used,
            attempts = attempts,
            duration_ms = duration_ms,
            "Draw completed"
        );
    }
}
