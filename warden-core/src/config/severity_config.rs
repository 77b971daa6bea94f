use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds of the severity decision procedure.
///
/// Defaults reproduce the canonical rule table. The comparison operators are
/// fixed by the rules themselves; only the numbers are tunable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    /// `totalNegative` above which one negative adjective escalates to HIGH.
    pub high_total_negative: f64,
    /// `totalNegative` at which a record with no negative adjectives is HIGH.
    pub high_total_negative_without_adjectives: f64,
    /// Flagged PERSON entities that force HIGH.
    pub high_flagged_entities: usize,
    /// Sentiment balance at or below which the record is HIGH.
    pub high_sentiment_balance: f64,
    /// Lower bound of the LOW band for records with negative adjectives.
    pub low_total_negative_floor: f64,
    /// `totalNegative` at which a record with no negative adjectives is LOW.
    pub low_total_negative_without_adjectives: f64,
    /// Flagged PERSON entities that make a record LOW.
    pub low_flagged_entities: usize,
    /// Lower bound of the slightly-negative balance band.
    pub low_sentiment_balance_floor: f64,
    /// Neutral sentiment above which a record is LOW.
    pub neutral_ceiling: f64,
    /// Positive sentiment at which a record is ZERO.
    pub zero_positive_floor: f64,
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            high_total_negative: defaults::DEFAULT_HIGH_TOTAL_NEGATIVE,
            high_total_negative_without_adjectives:
                defaults::DEFAULT_HIGH_TOTAL_NEGATIVE_WITHOUT_ADJECTIVES,
            high_flagged_entities: defaults::DEFAULT_HIGH_FLAGGED_ENTITIES,
            high_sentiment_balance: defaults::DEFAULT_HIGH_SENTIMENT_BALANCE,
            low_total_negative_floor: defaults::DEFAULT_LOW_TOTAL_NEGATIVE_FLOOR,
            low_total_negative_without_adjectives:
                defaults::DEFAULT_LOW_TOTAL_NEGATIVE_WITHOUT_ADJECTIVES,
            low_flagged_entities: defaults::DEFAULT_LOW_FLAGGED_ENTITIES,
            low_sentiment_balance_floor: defaults::DEFAULT_LOW_SENTIMENT_BALANCE_FLOOR,
            neutral_ceiling: defaults::DEFAULT_NEUTRAL_CEILING,
            zero_positive_floor: defaults::DEFAULT_ZERO_POSITIVE_FLOOR,
        }
    }
}
