//! CLI configuration from environment variables and flags.

use std::env;

use crate::args::Args;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Four labelled lines
    Text,
    /// One JSON object
    Json,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive for stderr diagnostics (e.g. "warn", "debug")
    pub log_level: String,

    /// Report format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ANCHOR_DISC_LOG_LEVEL`: Log level (default: warn). `RUST_LOG` still
    ///   takes precedence when the subscriber is installed.
    ///
    /// Only stderr diagnostics are configurable here; the report format is
    /// chosen by flags alone.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("ANCHOR_DISC_LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            log_level,
            output: defaults.output,
        }
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_args(mut self, args: &Args) -> Self {
        if args.json {
            self.output = OutputFormat::Json;
        }
        if args.verbose > 0 {
            self.log_level = level_for_verbosity(args.verbose).to_string();
        }
        self
    }
}

/// Map a `-v` count to a log level.
pub fn level_for_verbosity(count: u8) -> &'static str {
    match count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
