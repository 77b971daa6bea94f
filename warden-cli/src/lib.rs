//! # warden-cli
//!
//! Argument parsing and command dispatch for the `warden` binary. Kept in a
//! library so commands can be driven from tests.

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use warden_core::config::WardenConfig;

/// warden - incident severity classification
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "WARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter used when WARDEN_LOG is unset (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a JSON dataset and emit incident reports
    Classify(commands::classify::ClassifyArgs),

    /// Print dataset-wide statistics for a JSON dataset
    Summarize(commands::summarize::SummarizeArgs),

    /// Decide the tier of a validation scorecard read from JSON
    Decide(commands::decide::DecideArgs),

    /// Inspect the severity lexicon
    #[command(subcommand)]
    Lexicon(commands::lexicon::LexiconCommands),

    /// Print the effective configuration as TOML
    Config,
}

/// Load configuration, initialize tracing, and dispatch.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => WardenConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => WardenConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    if cli.json_logs {
        config.observability.json = true;
    }
    warden_observability::init_tracing_with_config(&config.observability);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Classify(args) => commands::classify::run(&config, &args, &mut stdout),
        Commands::Summarize(args) => commands::summarize::run(&config, &args, &mut stdout),
        Commands::Decide(args) => commands::decide::run(&config, &args, &mut stdout),
        Commands::Lexicon(cmd) => commands::lexicon::run(&config, &cmd, &mut stdout),
        Commands::Config => commands::show_config(&config, &mut stdout),
    }
}
