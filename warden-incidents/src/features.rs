use std::collections::BTreeMap;

use serde::Serialize;
use warden_core::models::{Entity, SeverityTier, Token, ValidationRecord};

/// One row of the feature dataset: text, linguistic signals, scorecard,
/// and the decision, kept for model training and audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureEntry {
    pub original_text: String,
    pub cleaned_text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
    pub validation: ValidationRecord,
    pub severity_level: SeverityTier,
    pub decision_rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tfidf: Option<BTreeMap<String, f64>>,
}
