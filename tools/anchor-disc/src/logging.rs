//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout carries only the report. A bad level
//! never aborts the run; it degrades to [`FALLBACK_LEVEL`].

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliConfig;

/// Level used when the configured directive does not parse.
pub const FALLBACK_LEVEL: &str = "warn";

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &CliConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| configured_filter(&config.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Filter for `level`, or [`FALLBACK_LEVEL`] with a one-line warning on stderr.
pub fn configured_filter(level: &str) -> EnvFilter {
    level_filter(level).unwrap_or_else(|err| {
        eprintln!(
            "warning: invalid log level {:?} ({}), using {:?}",
            level, err, FALLBACK_LEVEL
        );
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

/// Filter for a level directive such as `"debug"` or `"anchor_discriminator=trace"`.
pub fn level_filter(level: &str) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    EnvFilter::try_new(level)
}
