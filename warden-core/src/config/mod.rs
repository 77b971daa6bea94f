pub mod defaults;
mod incident_config;
mod lexicon_config;
mod observability_config;
mod pipeline_config;
mod severity_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, WardenResult};

pub use incident_config::IncidentConfig;
pub use lexicon_config::{DuplicatePolicy, LexiconConfig, LexiconMatchMode};
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use severity_config::SeverityConfig;

/// Top-level Warden configuration.
///
/// Every section defaults independently, so an empty TOML document yields
/// the canonical engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    pub severity: SeverityConfig,
    pub lexicon: LexiconConfig,
    pub incidents: IncidentConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl WardenConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> WardenResult<Self> {
        Self::parse(source, "<inline>")
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> WardenResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display }.into());
        }
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&source, &display)
    }

    fn parse(source: &str, origin: &str) -> WardenResult<Self> {
        let config: WardenConfig = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the rule table inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.severity;

        let finite = [
            ("severity.high_total_negative", s.high_total_negative),
            (
                "severity.high_total_negative_without_adjectives",
                s.high_total_negative_without_adjectives,
            ),
            ("severity.high_sentiment_balance", s.high_sentiment_balance),
            ("severity.low_total_negative_floor", s.low_total_negative_floor),
            (
                "severity.low_total_negative_without_adjectives",
                s.low_total_negative_without_adjectives,
            ),
            ("severity.low_sentiment_balance_floor", s.low_sentiment_balance_floor),
            ("severity.neutral_ceiling", s.neutral_ceiling),
            ("severity.zero_positive_floor", s.zero_positive_floor),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        if s.low_total_negative_floor < 0.0 {
            return Err(invalid(
                "severity.low_total_negative_floor",
                "must not be negative",
            ));
        }
        if s.low_total_negative_floor >= s.high_total_negative {
            return Err(invalid(
                "severity.low_total_negative_floor",
                format!(
                    "must be below severity.high_total_negative ({})",
                    s.high_total_negative
                ),
            ));
        }
        if s.low_total_negative_without_adjectives > s.high_total_negative_without_adjectives {
            return Err(invalid(
                "severity.low_total_negative_without_adjectives",
                format!(
                    "must not exceed severity.high_total_negative_without_adjectives ({})",
                    s.high_total_negative_without_adjectives
                ),
            ));
        }
        if s.high_sentiment_balance >= s.low_sentiment_balance_floor {
            return Err(invalid(
                "severity.high_sentiment_balance",
                format!(
                    "must be below severity.low_sentiment_balance_floor ({})",
                    s.low_sentiment_balance_floor
                ),
            ));
        }
        if s.low_sentiment_balance_floor > 0.0 {
            return Err(invalid(
                "severity.low_sentiment_balance_floor",
                "must not be positive",
            ));
        }
        if s.low_flagged_entities == 0 || s.high_flagged_entities <= s.low_flagged_entities {
            return Err(invalid(
                "severity.high_flagged_entities",
                "must exceed severity.low_flagged_entities, which must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&s.neutral_ceiling) {
            return Err(invalid("severity.neutral_ceiling", "must be within [0, 1]"));
        }

        for (phrase, weight) in &self.lexicon.extra {
            if phrase.trim().is_empty() {
                return Err(invalid("lexicon.extra", "phrases must not be empty"));
            }
            if !weight.is_finite() || *weight >= 0.0 {
                return Err(invalid(
                    "lexicon.extra",
                    format!("weight for '{phrase}' must be negative, got {weight}"),
                ));
            }
        }
        if self.lexicon.context_words.iter().any(|w| w.trim().is_empty()) {
            return Err(invalid("lexicon.context_words", "words must not be empty"));
        }

        if self.incidents.id_offset.checked_add(u32::MAX as u64).is_none() {
            return Err(invalid("incidents.id_offset", "leaves no room for a batch"));
        }
        if self.pipeline.tfidf_max_features == 0 {
            return Err(invalid("pipeline.tfidf_max_features", "must be at least 1"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}
