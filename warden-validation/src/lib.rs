//! # warden-validation
//!
//! Turns one annotated record into a [`ValidationRecord`] scorecard:
//! token and entity counts, lexicon score, adjective counts, merged
//! sentiment, total negative mass, and flagged PERSON entities.
//!
//! [`ValidationRecord`]: warden_core::models::ValidationRecord

pub mod engine;
pub mod entity_context;
pub mod sentiment;

pub use engine::FeatureValidator;
pub use entity_context::flag_entities;
