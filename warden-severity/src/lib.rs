//! # warden-severity
//!
//! Maps a [`ValidationRecord`] to a [`SeverityTier`] through an ordered rule
//! table: HIGH rules, the empty-record guard, LOW rules, ZERO rules, then the
//! ZERO default. First match wins.
//!
//! [`ValidationRecord`]: warden_core::models::ValidationRecord
//! [`SeverityTier`]: warden_core::models::SeverityTier

pub mod engine;
pub mod rules;
pub mod tally;

pub use engine::{SeverityDecision, SeverityEngine};
pub use rules::{RuleId, SeverityRule};
pub use tally::SeverityTally;
