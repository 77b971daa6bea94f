use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::SentimentSummary;

/// Scorecard produced by the feature validator for one record.
///
/// Immutable once produced; the severity decision consumes it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRecord {
    pub token_count: usize,
    pub entity_count: usize,
    pub negative_adjective_count: usize,
    pub positive_adjective_count: usize,
    /// Sum of `|weight|` over every lexicon match.
    pub lexicon_score: f64,
    pub sentiment_summary: SentimentSummary,
    /// `lexicon_score` plus the token-summed negative sentiment.
    pub total_negative: f64,
    /// PERSON entity texts co-occurring with negative context words.
    pub flagged_entities: BTreeSet<String>,
}

impl ValidationRecord {
    /// Scorecard of a record with no tokens and no entities.
    pub fn empty() -> Self {
        Self {
            token_count: 0,
            entity_count: 0,
            negative_adjective_count: 0,
            positive_adjective_count: 0,
            lexicon_score: 0.0,
            sentiment_summary: SentimentSummary::default(),
            total_negative: 0.0,
            flagged_entities: BTreeSet::new(),
        }
    }

    /// `positive - total_negative`.
    pub fn sentiment_balance(&self) -> f64 {
        self.sentiment_summary.positive - self.total_negative
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged_entities.len()
    }

    /// True when the record carries no evidence at all: no tokens, no
    /// entities, nothing flagged, and no negative mass.
    pub fn is_signal_free(&self) -> bool {
        self.token_count == 0
            && self.entity_count == 0
            && self.flagged_entities.is_empty()
            && self.total_negative == 0.0
    }
}

impl Default for ValidationRecord {
    fn default() -> Self {
        Self::empty()
    }
}
