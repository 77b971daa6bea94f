//! Loading a replacement severity table from disk.

use std::path::Path;

use serde::Deserialize;
use warden_core::errors::{WardenError, WardenResult};

/// One entry of an on-disk lexicon table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableEntry {
    pub phrase: String,
    pub weight: f64,
}

/// Read a JSON array of `{"phrase": ..., "weight": ...}` objects.
///
/// An array is used rather than an object so duplicate phrases survive
/// parsing and reach the duplicate policy.
pub fn load_table(path: impl AsRef<Path>) -> WardenResult<Vec<TableEntry>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| WardenError::io(path.display().to_string(), &e))?;
    let entries: Vec<TableEntry> = serde_json::from_str(&raw)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded lexicon table");
    Ok(entries)
}
