//! Dataset-wide statistics over the feature dataset.

use std::collections::BTreeMap;

use serde::Serialize;
use warden_core::models::SentimentSummary;
use warden_severity::SeverityTally;

use crate::features::FeatureEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub record_count: usize,
    /// Token count per part-of-speech tag.
    pub pos_distribution: BTreeMap<String, usize>,
    /// Entity count per label.
    pub entity_distribution: BTreeMap<String, usize>,
    /// Mean of the per-record sentiment summaries. All zero for an empty dataset.
    pub average_sentiment: SentimentSummary,
    pub severity: SeverityTally,
}

impl DatasetSummary {
    pub fn from_features(features: &[FeatureEntry], tally: SeverityTally) -> Self {
        let mut pos_distribution = BTreeMap::new();
        let mut entity_distribution = BTreeMap::new();
        let (mut positive, mut negative, mut neutral) = (0.0, 0.0, 0.0);

        for entry in features {
            for token in &entry.tokens {
                *pos_distribution.entry(token.pos.to_string()).or_insert(0) += 1;
            }
            for entity in &entry.entities {
                *entity_distribution.entry(entity.label.to_string()).or_insert(0) += 1;
            }
            let s = &entry.validation.sentiment_summary;
            positive += s.positive;
            negative += s.negative;
            neutral += s.neutral;
        }

        let average_sentiment = if features.is_empty() {
            SentimentSummary::new(0.0, 0.0, 0.0)
        } else {
            let n = features.len() as f64;
            SentimentSummary::new(positive / n, negative / n, neutral / n)
        };

        Self {
            record_count: features.len(),
            pos_distribution,
            entity_distribution,
            average_sentiment,
            severity: tally,
        }
    }
}
