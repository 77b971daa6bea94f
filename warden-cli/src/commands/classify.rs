use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use warden_core::config::WardenConfig;
use warden_incidents::output::save_json;
use warden_incidents::source::load_dataset;
use warden_incidents::SeverityPipeline;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON dataset: an array of records with `content` or `text`
    pub input: PathBuf,

    /// Write incident reports here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the feature dataset (texts, tokens, scorecards, TF-IDF)
    #[arg(long)]
    pub features: Option<PathBuf>,

    /// Also write the dataset summary
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Validate records on the current thread only
    #[arg(long)]
    pub sequential: bool,

    /// Skip TF-IDF weights in the feature dataset
    #[arg(long)]
    pub no_tfidf: bool,
}

pub fn run(config: &WardenConfig, args: &ClassifyArgs, out: &mut dyn Write) -> Result<()> {
    let mut config = config.clone();
    if args.sequential {
        config.pipeline.parallel = false;
    }
    if args.no_tfidf {
        config.pipeline.include_tfidf = false;
    }

    let pipeline = SeverityPipeline::from_config(&config)?;
    let dataset = load_dataset(&args.input)
        .with_context(|| format!("reading dataset {}", args.input.display()))?;
    let result = pipeline.run_dataset(&dataset);

    match &args.output {
        Some(path) => save_json(path, &result.reports)?,
        None => super::write_json(out, &result.reports)?,
    }
    if let Some(path) = &args.features {
        save_json(path, &result.features)?;
    }
    if let Some(path) = &args.summary {
        save_json(path, &result.summary)?;
    }

    tracing::info!(
        reports = result.reports.len(),
        skipped = result.skipped.len(),
        high = result.tally.high,
        "classification finished"
    );
    Ok(())
}
