#![forbid(unsafe_code)]

//! Test harness for WebSTAR.
//!
//! - [`fixtures`] - reference portfolios
//! - [`test_logging`] - JSONL scenario logs for CI
//! - [`init_test_tracing`] - route `tracing` output through the test writer

pub mod fixtures;
pub mod test_logging;

use tracing_subscriber::EnvFilter;
use webstar_core::logging::LOG_ENV;

pub use test_logging::{JsonlLogger, jsonl_enabled, validate_jsonl_line};

/// Install a test-writer subscriber filtered by `WEBSTAR_LOG` (default
/// `debug`). Safe to call from every test.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}
