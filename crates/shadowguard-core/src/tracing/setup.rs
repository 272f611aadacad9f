//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV;

static INIT: Once = Once::new();

/// Crate targets covered by the fallback filter.
const TARGETS: &[&str] = &["shadowguard_core", "shadowguard_analysis", "shadowguard_cli"];

/// Initialize the shadowguard tracing/logging system.
///
/// Reads `SHADOWGUARD_LOG` for filter directives, e.g.
/// `SHADOWGUARD_LOG=shadowguard_analysis=debug`.
///
/// Falls back to `default_level` for every shadowguard crate when the
/// variable is unset or invalid. Output goes to stderr so stdout stays
/// free for machine-readable results.
///
/// This function is idempotent. Only the first call takes effect.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| fallback_filter(default_level));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(filter)
            .init();
    });
}

fn fallback_filter(level: &str) -> EnvFilter {
    EnvFilter::new(fallback_directives(level))
}

/// Builds `shadowguard_core=<level>,shadowguard_analysis=<level>,...`.
fn fallback_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
