//! Severity rules in evaluation order.
//!
//! HIGH: strong negative mass with a negative adjective, very strong mass
//! without one, two or more flagged people, or a deeply negative balance.
//! LOW: moderate negative mass, one flagged person, a mildly negative
//! balance, or a mostly neutral record. ZERO: positive evidence or no target.

use std::fmt;

use serde::Serialize;
use warden_core::config::SeverityConfig;
use warden_core::models::{SeverityTier, ValidationRecord};

/// Stable identifier of a rule, reported with each decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    HighNegativeWithAdjective,
    HighNegativeWithoutAdjective,
    HighFlaggedEntities,
    HighSentimentBalance,
    HighAdjectiveAtThreshold,
    EmptyRecord,
    LowNegativeWithAdjective,
    LowNegativeWithoutAdjective,
    LowFlaggedEntity,
    LowSentimentBalance,
    LowNeutral,
    ZeroPositiveBalance,
    ZeroNoTarget,
    ZeroPositiveSentiment,
    ZeroPositiveAdjective,
    ZeroNeutralPositiveAdjective,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::HighNegativeWithAdjective => "high_negative_with_adjective",
            RuleId::HighNegativeWithoutAdjective => "high_negative_without_adjective",
            RuleId::HighFlaggedEntities => "high_flagged_entities",
            RuleId::HighSentimentBalance => "high_sentiment_balance",
            RuleId::HighAdjectiveAtThreshold => "high_adjective_at_threshold",
            RuleId::EmptyRecord => "empty_record",
            RuleId::LowNegativeWithAdjective => "low_negative_with_adjective",
            RuleId::LowNegativeWithoutAdjective => "low_negative_without_adjective",
            RuleId::LowFlaggedEntity => "low_flagged_entity",
            RuleId::LowSentimentBalance => "low_sentiment_balance",
            RuleId::LowNeutral => "low_neutral",
            RuleId::ZeroPositiveBalance => "zero_positive_balance",
            RuleId::ZeroNoTarget => "zero_no_target",
            RuleId::ZeroPositiveSentiment => "zero_positive_sentiment",
            RuleId::ZeroPositiveAdjective => "zero_positive_adjective",
            RuleId::ZeroNeutralPositiveAdjective => "zero_neutral_positive_adjective",
        }
    }

    /// Whether the rule's condition holds for `record` under `config`.
    pub fn matches(&self, record: &ValidationRecord, config: &SeverityConfig) -> bool {
        let total_negative = record.total_negative;
        let negative_adjectives = record.negative_adjective_count;
        let flagged = record.flagged_count();
        let balance = record.sentiment_balance();
        let summary = &record.sentiment_summary;

        match self {
            RuleId::HighNegativeWithAdjective => {
                total_negative > config.high_total_negative && negative_adjectives >= 1
            }
            RuleId::HighNegativeWithoutAdjective => {
                total_negative >= config.high_total_negative_without_adjectives
                    && negative_adjectives == 0
            }
            RuleId::HighFlaggedEntities => flagged >= config.high_flagged_entities,
            RuleId::HighSentimentBalance => balance <= config.high_sentiment_balance,
            RuleId::HighAdjectiveAtThreshold => {
                negative_adjectives >= 1 && total_negative >= config.high_total_negative
            }
            RuleId::EmptyRecord => record.is_signal_free(),
            RuleId::LowNegativeWithAdjective => {
                (config.low_total_negative_floor..config.high_total_negative)
                    .contains(&total_negative)
                    && negative_adjectives >= 1
            }
            RuleId::LowNegativeWithoutAdjective => {
                total_negative >= config.low_total_negative_without_adjectives
                    && negative_adjectives == 0
            }
            RuleId::LowFlaggedEntity => flagged >= config.low_flagged_entities,
            RuleId::LowSentimentBalance => {
                (config.low_sentiment_balance_floor..0.0).contains(&balance)
            }
            RuleId::LowNeutral => summary.neutral > config.neutral_ceiling,
            RuleId::ZeroPositiveBalance => balance > 0.0,
            RuleId::ZeroNoTarget => negative_adjectives == 0 && flagged == 0,
            RuleId::ZeroPositiveSentiment => summary.positive >= config.zero_positive_floor,
            RuleId::ZeroPositiveAdjective => record.positive_adjective_count >= 1,
            RuleId::ZeroNeutralPositiveAdjective => {
                summary.neutral > config.neutral_ceiling && record.positive_adjective_count >= 1
            }
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule and the tier it assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityRule {
    pub id: RuleId,
    pub tier: SeverityTier,
}

const fn rule(id: RuleId, tier: SeverityTier) -> SeverityRule {
    SeverityRule { id, tier }
}

/// Every rule in evaluation order.
///
/// `EmptyRecord` sits between the HIGH and LOW groups: a record with no
/// tokens scores neutral 1.0 and would otherwise land in LOW.
pub static ALL_RULES: [SeverityRule; 16] = [
    // HIGH
    rule(RuleId::HighNegativeWithAdjective, SeverityTier::High),
    rule(RuleId::HighNegativeWithoutAdjective, SeverityTier::High),
    rule(RuleId::HighFlaggedEntities, SeverityTier::High),
    rule(RuleId::HighSentimentBalance, SeverityTier::High),
    rule(RuleId::HighAdjectiveAtThreshold, SeverityTier::High),
    // Guard
    rule(RuleId::EmptyRecord, SeverityTier::Zero),
    // LOW
    rule(RuleId::LowNegativeWithAdjective, SeverityTier::Low),
    rule(RuleId::LowNegativeWithoutAdjective, SeverityTier::Low),
    rule(RuleId::LowFlaggedEntity, SeverityTier::Low),
    rule(RuleId::LowSentimentBalance, SeverityTier::Low),
    rule(RuleId::LowNeutral, SeverityTier::Low),
    // ZERO
    rule(RuleId::ZeroPositiveBalance, SeverityTier::Zero),
    rule(RuleId::ZeroNoTarget, SeverityTier::Zero),
    rule(RuleId::ZeroPositiveSentiment, SeverityTier::Zero),
    rule(RuleId::ZeroPositiveAdjective, SeverityTier::Zero),
    rule(RuleId::ZeroNeutralPositiveAdjective, SeverityTier::Zero),
];

pub fn all_rules() -> &'static [SeverityRule] {
    &ALL_RULES
}

/// First rule whose condition holds, or `None` when only the default applies.
pub fn find_applicable_rule(
    record: &ValidationRecord,
    config: &SeverityConfig,
) -> Option<SeverityRule> {
    ALL_RULES
        .iter()
        .find(|r| r.id.matches(record, config))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_ordered_high_guard_low_zero() {
        let tiers: Vec<_> = all_rules().iter().map(|r| r.tier).collect();
        let first_low = tiers.iter().position(|t| *t == SeverityTier::Low).unwrap();
        let last_high = tiers.iter().rposition(|t| *t == SeverityTier::High).unwrap();
        assert!(last_high < first_low);
        assert_eq!(all_rules()[last_high + 1].id, RuleId::EmptyRecord);
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = all_rules().iter().map(|r| r.id.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all_rules().len());
    }
}
