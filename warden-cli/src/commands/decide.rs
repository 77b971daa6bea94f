use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use warden_core::config::WardenConfig;
use warden_core::errors::{WardenError, WardenResult};
use warden_core::models::ValidationRecord;
use warden_severity::SeverityEngine;

#[derive(Args, Debug)]
pub struct DecideArgs {
    /// JSON file holding one validation scorecard or an array of them
    pub input: PathBuf,
}

pub fn run(config: &WardenConfig, args: &DecideArgs, out: &mut dyn Write) -> Result<()> {
    let records = read_scorecards(&args.input)
        .with_context(|| format!("reading scorecards from {}", args.input.display()))?;

    let engine = SeverityEngine::new(config.severity.clone());
    let decisions: Vec<_> = records.iter().map(|r| engine.evaluate(r)).collect();
    super::write_json(out, &decisions)
}

/// One scorecard object or an array of them.
fn read_scorecards(path: &Path) -> WardenResult<Vec<ValidationRecord>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| WardenError::io(path.display().to_string(), &e))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let records = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(records)
}
