use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity tier assigned to a record.
///
/// `Zero` means "not actionable". Ordering follows escalation:
/// `Zero < Low < High`. The serialized strings are consumed by model
/// training, where `"high"` is the positive class.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    #[default]
    Zero,
    Low,
    High,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 3] = [SeverityTier::Zero, SeverityTier::Low, SeverityTier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Zero => "zero",
            SeverityTier::Low => "low",
            SeverityTier::High => "high",
        }
    }

    /// Whether the tier should open a moderation incident that needs attention.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, SeverityTier::Zero)
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(SeverityTier::Zero),
            "low" => Ok(SeverityTier::Low),
            "high" => Ok(SeverityTier::High),
            other => Err(format!("unknown severity tier '{other}'")),
        }
    }
}
