//! # warden-observability
//!
//! Structured logging for the Warden workspace: subscriber setup driven by
//! `WARDEN_LOG` and span macros for validation, decision, and batch runs.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_config};
