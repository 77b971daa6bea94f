//! # warden-incidents
//!
//! The outer layer of the engine:
//! - **source**: JSON datasets → [`SourceRecord`]s with their [`ContentMeta`].
//! - **generator**: scorecards → [`IncidentReport`]s with sequential ids.
//! - **pipeline**: annotate, validate, decide, and report a whole batch.
//! - **summary**: dataset-wide distributions and averages.
//!
//! [`ContentMeta`]: warden_core::models::ContentMeta
//! [`IncidentReport`]: warden_core::models::IncidentReport

pub mod features;
pub mod generator;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod summary;

pub use features::FeatureEntry;
pub use generator::{GeneratedReports, IncidentIdSequence, IncidentReportGenerator, RecordLookup};
pub use pipeline::{BatchResult, SeverityPipeline};
pub use source::{SkippedRecord, SourceDataset, SourceRecord};
pub use summary::DatasetSummary;
