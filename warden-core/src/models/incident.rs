use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContentType, SeverityTier};

/// Workflow status of an incident. The engine only creates `PendingReview`;
/// the other states belong to the moderation workflow downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    #[default]
    #[serde(rename = "pending review")]
    PendingReview,
    #[serde(rename = "under review")]
    UnderReview,
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "dismissed")]
    Dismissed,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::PendingReview => "pending review",
            IncidentStatus::UnderReview => "under review",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted moderation incident. Serialized as a single JSON object
/// per record for the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub content_id: String,
    pub incident_id: String,
    pub author_id: String,
    pub content_type: ContentType,
    pub severity_level: SeverityTier,
    pub status: IncidentStatus,
}
