//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RUST_LOG` - Log filter directive (default: warn)
//! - `SHOPKEEP_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//!
//! A `.env` file in the working directory is loaded first if present.
//! Logs always go to stderr; stdout carries only the demo output.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value we cannot use.
    #[error("Invalid value for {var}: {value}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Runtime configuration for the `shopkeep` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `EnvFilter` directive.
    pub log_filter: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_format: LogFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `RUST_LOG` is not a valid filter directive or
    /// `SHOPKEEP_LOG_FORMAT` is not `pretty` or `json`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        if EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "RUST_LOG",
                value: log_filter,
            });
        }

        let log_format = match lookup("SHOPKEEP_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(value) => value.parse().map_err(|()| ConfigError::InvalidValue {
                var: "SHOPKEEP_LOG_FORMAT",
                value,
            })?,
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }

    /// Install the global tracing subscriber, writing to stderr.
    pub fn init_tracing(&self) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(&self.log_filter))
            .with_writer(std::io::stderr);

        match self.log_format {
            LogFormat::Pretty => builder.init(),
            LogFormat::Json => builder.json().init(),
        }
    }
}
