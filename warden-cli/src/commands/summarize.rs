use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use warden_core::config::WardenConfig;
use warden_incidents::source::load_dataset;
use warden_incidents::SeverityPipeline;

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// JSON dataset: an array of records with `content` or `text`
    pub input: PathBuf,
}

pub fn run(config: &WardenConfig, args: &SummarizeArgs, out: &mut dyn Write) -> Result<()> {
    let mut config = config.clone();
    config.pipeline.include_tfidf = false;

    let pipeline = SeverityPipeline::from_config(&config)?;
    let dataset = load_dataset(&args.input)
        .with_context(|| format!("reading dataset {}", args.input.display()))?;
    let result = pipeline.run_dataset(&dataset);
    super::write_json(out, &result.summary)
}
