//! JSON output for reports, features, and summaries.

use std::path::Path;

use serde::Serialize;
use warden_core::errors::{WardenError, WardenResult};

/// Pretty-printed JSON, the format downstream consumers read.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> WardenResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` as pretty JSON to `path`, creating parent directories.
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> WardenResult<()> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WardenError::io(&shown, &e))?;
    }
    std::fs::write(path, to_json(value)?).map_err(|e| WardenError::io(&shown, &e))?;
    tracing::info!(path = %shown, "json written");
    Ok(())
}
