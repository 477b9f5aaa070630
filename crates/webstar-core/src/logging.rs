#![forbid(unsafe_code)]

//! Tracing subscriber installation for hosts and integration tests.
//!
//! The filter is read from `WEBSTAR_LOG` (same syntax as `RUST_LOG`) and
//! falls back to `info`. Installing twice is reported as an error rather than
//! panicking, so tests can call [`init`] freely and ignore the result.

use std::fmt;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "WEBSTAR_LOG";

/// Output format for the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event (production logging).
    Json,
}

/// Failure to install the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingError {
    message: String,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to install tracing subscriber: {}", self.message)
    }
}

impl std::error::Error for LoggingError {}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
pub fn init(format: LogFormat) -> Result<(), LoggingError> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter());
    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|err| LoggingError {
        message: err.to_string(),
    })?;
    tracing::debug!(?format, env = LOG_ENV, "tracing subscriber installed");
    Ok(())
}
