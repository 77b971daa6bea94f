use serde::{Deserialize, Serialize};

/// Scores returned by the sentiment scorer for a token or a whole text.
///
/// `positive`, `negative`, and `neutral` are non-negative but are not
/// guaranteed to sum to 1. `compound` lies in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl SentimentScores {
    pub fn new(positive: f64, negative: f64, neutral: f64, compound: f64) -> Self {
        Self {
            positive,
            negative,
            neutral,
            compound,
        }
    }

    /// All-neutral scores.
    pub fn neutral() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }
}

/// Aggregated sentiment stored on a [`crate::ValidationRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentSummary {
    pub fn new(positive: f64, negative: f64, neutral: f64) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }
}

impl Default for SentimentSummary {
    /// A record with nothing to score is maximally neutral.
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
