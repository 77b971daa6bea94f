use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use warden_core::config::{DuplicatePolicy, LexiconMatchMode};
use warden_core::errors::LexiconError;

use crate::builtin;
use crate::phrase::PhraseMatcher;

/// One lexicon hit inside a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconMatch {
    pub phrase: String,
    pub weight: f64,
}

/// Lexicon contribution of one record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexiconScore {
    /// Sum of `|weight|` over all matches.
    pub score: f64,
    pub matches: Vec<LexiconMatch>,
}

impl LexiconScore {
    fn push(&mut self, phrase: &str, weight: f64) {
        self.score += weight.abs();
        self.matches.push(LexiconMatch {
            phrase: phrase.to_string(),
            weight,
        });
    }
}

/// Read-only mapping from lowercased phrase to negative severity weight.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    weights: HashMap<String, f64>,
    match_mode: LexiconMatchMode,
    /// Multi-word phrases; only built in phrase mode.
    phrases: Option<PhraseMatcher>,
}

impl LexiconStore {
    /// Build from `(phrase, weight)` entries, applying `policy` to duplicates.
    ///
    /// Phrases are trimmed, lowercased, and whitespace-collapsed. Every weight
    /// must be finite and strictly negative.
    pub fn from_entries<I, S>(
        entries: I,
        policy: DuplicatePolicy,
        match_mode: LexiconMatchMode,
    ) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut weights = HashMap::new();
        insert_entries(&mut weights, entries, policy)?;
        Self::from_weights(weights, match_mode)
    }

    /// The built-in table, duplicates resolved by `policy`.
    pub fn builtin(
        policy: DuplicatePolicy,
        match_mode: LexiconMatchMode,
    ) -> Result<Self, LexiconError> {
        Self::from_entries(builtin::SEVERITY_ENTRIES.iter().copied(), policy, match_mode)
    }

    fn from_weights(
        weights: HashMap<String, f64>,
        match_mode: LexiconMatchMode,
    ) -> Result<Self, LexiconError> {
        let phrases = match match_mode {
            LexiconMatchMode::Token => None,
            LexiconMatchMode::Phrase => {
                let mut multi_word: Vec<(String, f64)> = weights
                    .iter()
                    .filter(|(phrase, _)| phrase.contains(' '))
                    .map(|(phrase, weight)| (phrase.clone(), *weight))
                    .collect();
                // Stable pattern ids across runs.
                multi_word.sort_by(|a, b| a.0.cmp(&b.0));
                Some(PhraseMatcher::new(multi_word)?)
            }
        };

        tracing::debug!(
            entries = weights.len(),
            match_mode = ?match_mode,
            "lexicon store built"
        );

        Ok(Self {
            weights,
            match_mode,
            phrases,
        })
    }

    /// Return a copy of this store with `entries` applied on top.
    pub fn with_entries<I, S>(
        &self,
        entries: I,
        policy: DuplicatePolicy,
    ) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut weights = self.weights.clone();
        insert_entries(&mut weights, entries, policy)?;
        Self::from_weights(weights, self.match_mode)
    }

    /// Weight of an already lowercased phrase.
    pub fn lookup(&self, phrase_lower: &str) -> Option<f64> {
        self.weights.get(phrase_lower).copied()
    }

    pub fn contains(&self, phrase_lower: &str) -> bool {
        self.weights.contains_key(phrase_lower)
    }

    /// Every phrase in the store, sorted.
    pub fn all_phrases(&self) -> BTreeSet<&str> {
        self.weights.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn match_mode(&self) -> LexiconMatchMode {
        self.match_mode
    }

    /// Score a record's lowercased tokens.
    ///
    /// Every token found in the store contributes `|weight|`, repeats
    /// included. In phrase mode each occurrence of a multi-word phrase
    /// contributes as well.
    pub fn score_tokens(&self, tokens_lower: &[String]) -> LexiconScore {
        let mut score = LexiconScore::default();
        for token in tokens_lower {
            if let Some(weight) = self.lookup(token) {
                score.push(token, weight);
            }
        }
        if let Some(matcher) = &self.phrases {
            for (phrase, weight) in matcher.find_all(tokens_lower) {
                score.push(phrase, weight);
            }
        }
        score
    }
}

/// Canonical key for a phrase: trimmed, lowercased, single-spaced.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn insert_entries<I, S>(
    weights: &mut HashMap<String, f64>,
    entries: I,
    policy: DuplicatePolicy,
) -> Result<(), LexiconError>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    for (phrase, weight) in entries {
        let key = normalize_phrase(phrase.as_ref());
        if key.is_empty() {
            return Err(LexiconError::EmptyPhrase);
        }
        if !weight.is_finite() {
            return Err(LexiconError::NonFiniteWeight { phrase: key });
        }
        if weight >= 0.0 {
            return Err(LexiconError::NonNegativeWeight {
                phrase: key,
                weight,
            });
        }

        match weights.get(&key).copied() {
            Some(previous) if previous != weight => match policy {
                DuplicatePolicy::Reject => {
                    return Err(LexiconError::ConflictingDuplicate {
                        phrase: key,
                        first: previous,
                        second: weight,
                    });
                }
                DuplicatePolicy::LastWriteWins => {
                    tracing::warn!(
                        phrase = %key,
                        previous,
                        weight,
                        "duplicate lexicon phrase, keeping the later weight"
                    );
                }
            },
            Some(_) => {
                tracing::debug!(phrase = %key, "duplicate lexicon phrase with identical weight");
            }
            None => {}
        }
        weights.insert(key, weight);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowered(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn phrases_are_normalized_on_load() {
        let store = LexiconStore::from_entries(
            [("  Walking   L ", -0.3)],
            DuplicatePolicy::LastWriteWins,
            LexiconMatchMode::Token,
        )
        .unwrap();
        assert_eq!(store.lookup("walking l"), Some(-0.3));
    }

    #[test]
    fn token_mode_ignores_multi_word_phrases() {
        let store = LexiconStore::from_entries(
            [("kill yourself", -0.3), ("kill", -1.5)],
            DuplicatePolicy::LastWriteWins,
            LexiconMatchMode::Token,
        )
        .unwrap();
        let score = store.score_tokens(&lowered(&["kill", "yourself"]));
        assert_eq!(score.matches.len(), 1);
        assert!((score.score - 1.5).abs() < 1e-9);
    }

    #[test]
    fn phrase_mode_adds_multi_word_matches() {
        let store = LexiconStore::from_entries(
            [("kill yourself", -0.3), ("kill", -1.5)],
            DuplicatePolicy::LastWriteWins,
            LexiconMatchMode::Phrase,
        )
        .unwrap();
        let score = store.score_tokens(&lowered(&["kill", "yourself"]));
        assert_eq!(score.matches.len(), 2);
        assert!((score.score - 1.8).abs() < 1e-9);
    }

    #[test]
    fn repeated_tokens_count_each_time() {
        let store = LexiconStore::from_entries(
            [("dumb", -0.3)],
            DuplicatePolicy::LastWriteWins,
            LexiconMatchMode::Token,
        )
        .unwrap();
        let score = store.score_tokens(&lowered(&["dumb", "and", "dumb"]));
        assert!((score.score - 0.6).abs() < 1e-9);
    }
}
