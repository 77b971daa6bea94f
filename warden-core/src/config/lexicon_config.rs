use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// How lexicon phrases are matched against a record's tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconMatchMode {
    /// Each lowercased token is looked up on its own. Multi-word phrases
    /// never match. Compatible with previously labelled datasets.
    #[default]
    Token,
    /// Token lookup plus every occurrence of a multi-word phrase over the
    /// space-joined lowercased tokens.
    Phrase,
}

/// What to do when the same phrase is supplied more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later entry replaces the earlier one.
    #[default]
    LastWriteWins,
    /// A duplicate with a different weight aborts loading.
    Reject,
}

/// Lexicon subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub match_mode: LexiconMatchMode,
    pub duplicate_policy: DuplicatePolicy,
    /// JSON file of `{"phrase", "weight"}` entries replacing the built-in table.
    pub table: Option<String>,
    /// Negative words that flag co-occurring PERSON entities. Must be lexicon phrases.
    pub context_words: Vec<String>,
    /// Additional `phrase = weight` entries applied after the built-in table.
    pub extra: BTreeMap<String, f64>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            match_mode: LexiconMatchMode::default(),
            duplicate_policy: DuplicatePolicy::default(),
            table: None,
            context_words: defaults::DEFAULT_CONTEXT_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            extra: BTreeMap::new(),
        }
    }
}
