#![forbid(unsafe_code)]

//! Shared JSONL logging helpers for tests.
//!
//! Lines go to stderr only when `E2E_JSONL` or `CI` is set, so local runs
//! stay quiet while CI keeps a machine-readable trace of each scenario.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};

/// Schema version for test JSONL logs.
pub const TEST_JSONL_SCHEMA: &str = "webstar-test-jsonl-v1";

/// Returns true if JSONL logging should be emitted.
#[must_use]
pub fn jsonl_enabled() -> bool {
    std::env::var("E2E_JSONL").is_ok() || std::env::var("CI").is_ok()
}

/// JSONL logger with stable run context + per-entry sequence numbering.
pub struct JsonlLogger {
    run_id: String,
    seed: Option<u64>,
    context: Vec<(String, String)>,
    seq: AtomicU64,
}

impl JsonlLogger {
    /// Create a new JSONL logger with a run identifier.
    #[must_use]
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            seed: None,
            context: Vec::new(),
            seq: AtomicU64::new(0),
        }
    }

    /// Attach a deterministic seed field to all log entries.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a context field to all log entries.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Build one entry. Advances the sequence number.
    #[must_use]
    pub fn entry(&self, event: &str, fields: &[(&str, &str)]) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let mut obj = Map::new();
        obj.insert("schema_version".into(), Value::from(TEST_JSONL_SCHEMA));
        obj.insert("run_id".into(), Value::from(self.run_id.as_str()));
        obj.insert("seq".into(), Value::from(seq));
        obj.insert("event".into(), Value::from(event));
        if let Some(seed) = self.seed {
            obj.insert("seed".into(), Value::from(seed));
        }
        for (key, value) in &self.context {
            obj.insert(key.clone(), Value::from(value.as_str()));
        }
        for (key, value) in fields {
            obj.insert((*key).to_string(), Value::from(*value));
        }
        Value::Object(obj).to_string()
    }

    /// Emit a JSONL line if logging is enabled.
    pub fn log(&self, event: &str, fields: &[(&str, &str)]) {
        if !jsonl_enabled() {
            return;
        }
        eprintln!("{}", self.entry(event, fields));
    }
}

/// Check that `line` is a JSON object carrying the shared header fields and
/// every key in `required`.
pub fn validate_jsonl_line(line: &str, required: &[&str]) -> Result<(), String> {
    let value: Value =
        serde_json::from_str(line).map_err(|err| format!("not JSON ({err}): {line}"))?;
    let Some(obj) = value.as_object() else {
        return Err(format!("JSONL entry is not an object: {line}"));
    };
    for key in ["schema_version", "run_id", "seq", "event"]
        .iter()
        .chain(required.iter())
    {
        if !obj.contains_key(*key) {
            return Err(format!("JSONL entry missing required field {key}: {line}"));
        }
    }
    Ok(())
}
