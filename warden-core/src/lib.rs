//! # warden-core
//!
//! Foundation crate for the Warden incident severity engine.
//! Defines the record models, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WardenConfig;
pub use errors::{WardenError, WardenResult};
pub use models::{
    Annotation, ContentMeta, ContentType, Entity, EntityLabel, IncidentReport, IncidentStatus,
    PartOfSpeech, SentimentScores, SentimentSummary, SeverityTier, Token, ValidationRecord,
};
