//! SeverityEngine: pure decision over a validation scorecard.

use serde::Serialize;
use warden_core::config::SeverityConfig;
use warden_core::models::{SeverityTier, ValidationRecord};

use crate::rules::{self, RuleId};

/// Tier plus the rule that produced it. `rule` is `None` when no rule
/// matched and the ZERO default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityDecision {
    pub tier: SeverityTier,
    pub rule: Option<RuleId>,
}

impl SeverityDecision {
    /// Rule name for logs and feature output.
    pub fn rule_name(&self) -> &'static str {
        self.rule.map_or("default", |r| r.as_str())
    }
}

/// Decision procedure over configured thresholds. Holds no mutable state;
/// the same record always yields the same decision.
#[derive(Debug, Clone, Default)]
pub struct SeverityEngine {
    config: SeverityConfig,
}

impl SeverityEngine {
    pub fn new(config: SeverityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeverityConfig {
        &self.config
    }

    /// Tier for one record.
    pub fn decide(&self, record: &ValidationRecord) -> SeverityTier {
        self.evaluate(record).tier
    }

    /// Tier and deciding rule for one record.
    pub fn evaluate(&self, record: &ValidationRecord) -> SeverityDecision {
        let decision = match rules::find_applicable_rule(record, &self.config) {
            Some(rule) => SeverityDecision {
                tier: rule.tier,
                rule: Some(rule.id),
            },
            None => SeverityDecision {
                tier: SeverityTier::Zero,
                rule: None,
            },
        };

        tracing::debug!(
            tier = %decision.tier,
            rule = decision.rule_name(),
            total_negative = record.total_negative,
            negative_adjectives = record.negative_adjective_count,
            flagged = record.flagged_count(),
            "severity decided"
        );
        decision
    }
}
