//! Golden fixtures for Warden tests.
//!
//! Everything lives under `test-fixtures/golden`. Helpers take paths relative
//! to that directory, e.g. `"severity/decision_cases.json"`, so they work the
//! same from every crate's tests.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// `test-fixtures/golden`, located once per test binary by searching upward
/// from the calling crate's manifest directory.
pub fn golden_dir() -> &'static Path {
    static DIR: OnceLock<PathBuf> = OnceLock::new();
    DIR.get_or_init(|| {
        let start = std::env::var_os("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        start
            .ancestors()
            .map(|dir| dir.join("test-fixtures").join("golden"))
            .find(|candidate| candidate.is_dir())
            .unwrap_or_else(|| panic!("no test-fixtures/golden above {}", start.display()))
    })
}

pub fn golden_path(relative: &str) -> PathBuf {
    golden_dir().join(relative)
}

pub fn has_golden(relative: &str) -> bool {
    golden_path(relative).is_file()
}

/// Deserialize a golden JSON file. Panics with the offending path on failure.
pub fn read_golden<T: DeserializeOwned>(relative: &str) -> T {
    let path = golden_path(relative);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("bad JSON in {}: {e}", path.display()))
}

pub fn golden_value(relative: &str) -> Value {
    read_golden(relative)
}

/// A dataset under `golden/datasets`: the raw entries fed to the parser and
/// the outcome recorded for them.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenBatch {
    pub input: Value,
    pub expected: Value,
}

impl GoldenBatch {
    /// Load `golden/datasets/<name>.json`.
    pub fn load(name: &str) -> Self {
        read_golden(&format!("datasets/{name}.json"))
    }

    /// Number of raw input entries, skipped ones included.
    pub fn input_len(&self) -> usize {
        self.input.as_array().map_or(0, Vec::len)
    }
}
