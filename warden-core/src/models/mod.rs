mod annotation;
mod content;
mod entity;
mod incident;
mod sentiment;
mod severity;
mod token;
mod validation_record;

pub use annotation::Annotation;
pub use content::{ContentMeta, ContentType};
pub use entity::{Entity, EntityLabel};
pub use incident::{IncidentReport, IncidentStatus};
pub use sentiment::{SentimentScores, SentimentSummary};
pub use severity::SeverityTier;
pub use token::{PartOfSpeech, Token};
pub use validation_record::ValidationRecord;
