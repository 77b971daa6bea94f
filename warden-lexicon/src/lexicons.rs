use warden_core::config::LexiconConfig;
use warden_core::errors::{LexiconError, WardenResult};

use crate::builtin;
use crate::store::LexiconStore;
use crate::table;
use crate::word_set::WordSet;

/// The three read-only tables the validator consults, loaded once at startup
/// and shared by reference across workers.
#[derive(Debug, Clone)]
pub struct Lexicons {
    pub severity: LexiconStore,
    pub positive_adjectives: WordSet,
    pub context_words: WordSet,
}

impl Lexicons {
    /// Bundle prebuilt tables. Every context word must be a lexicon phrase.
    pub fn new(
        severity: LexiconStore,
        positive_adjectives: WordSet,
        context_words: WordSet,
    ) -> Result<Self, LexiconError> {
        if let Some(word) = context_words
            .sorted()
            .into_iter()
            .find(|w| !severity.contains(w))
        {
            return Err(LexiconError::ContextWordNotInLexicon {
                word: word.to_string(),
            });
        }
        Ok(Self {
            severity,
            positive_adjectives,
            context_words,
        })
    }

    /// Load according to configuration: built-in or on-disk table, then
    /// `extra` entries, then the context-word check.
    pub fn from_config(config: &LexiconConfig) -> WardenResult<Self> {
        let base = match &config.table {
            Some(path) => {
                let entries = table::load_table(path)?;
                LexiconStore::from_entries(
                    entries.into_iter().map(|e| (e.phrase, e.weight)),
                    config.duplicate_policy,
                    config.match_mode,
                )?
            }
            None => LexiconStore::builtin(config.duplicate_policy, config.match_mode)?,
        };
        let severity = if config.extra.is_empty() {
            base
        } else {
            base.with_entries(
                config.extra.iter().map(|(p, w)| (p.as_str(), *w)),
                config.duplicate_policy,
            )?
        };

        let lexicons = Self::new(
            severity,
            WordSet::new(builtin::POSITIVE_ADJECTIVES.iter()),
            WordSet::new(config.context_words.iter()),
        )?;

        tracing::info!(
            severity_phrases = lexicons.severity.len(),
            positive_adjectives = lexicons.positive_adjectives.len(),
            context_words = lexicons.context_words.len(),
            "lexicons loaded"
        );
        Ok(lexicons)
    }

    /// Built-in tables with default configuration.
    pub fn builtin() -> WardenResult<Self> {
        Self::from_config(&LexiconConfig::default())
    }
}
