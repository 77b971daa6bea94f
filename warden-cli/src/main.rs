//! warden - incident severity classification
//!
//! Classifies user-generated text records into severity tiers and emits
//! moderation incident reports.

use std::process::ExitCode;

use clap::Parser;
use warden_cli::Cli;
use warden_core::errors::{WardenError, WardenErrorCode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match warden_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<WardenError>() {
                Some(coded) => eprintln!("error: [{}] {err:#}", coded.error_code()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
