use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::IncidentStatus;

/// Incident id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentConfig {
    /// Numeric suffix of the first incident in a run.
    pub id_offset: u64,
    /// Prefix prepended to the numeric suffix.
    pub id_prefix: String,
    /// Status every new incident starts in.
    pub initial_status: IncidentStatus,
}

impl Default for IncidentConfig {
    fn default() -> Self {
        Self {
            id_offset: defaults::DEFAULT_INCIDENT_ID_OFFSET,
            id_prefix: defaults::DEFAULT_INCIDENT_ID_PREFIX.to_string(),
            initial_status: IncidentStatus::default(),
        }
    }
}
