//! Multi-word phrase matching over a token sequence.
//!
//! Patterns and haystack are padded with single spaces so a match always
//! starts and ends on a token boundary ("go die" never matches inside
//! "ago dies").

use aho_corasick::AhoCorasick;
use warden_core::errors::LexiconError;

/// Aho-Corasick automaton over the multi-word lexicon phrases.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    phrases: Vec<(String, f64)>,
}

impl PhraseMatcher {
    /// Build a matcher. `phrases` must already be lowercased.
    pub fn new(phrases: Vec<(String, f64)>) -> Result<Self, LexiconError> {
        let patterns: Vec<String> = phrases.iter().map(|(p, _)| format!(" {p} ")).collect();
        let automaton = AhoCorasick::new(&patterns).map_err(|e| LexiconError::MatcherBuild {
            message: e.to_string(),
        })?;
        Ok(Self { automaton, phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Every occurrence of every phrase in the lowercased tokens, overlapping
    /// occurrences included, in order of their end position.
    pub fn find_all<'a>(&'a self, tokens_lower: &[String]) -> Vec<(&'a str, f64)> {
        if tokens_lower.len() < 2 || self.phrases.is_empty() {
            return Vec::new();
        }
        let haystack = format!(" {} ", tokens_lower.join(" "));
        self.automaton
            .find_overlapping_iter(&haystack)
            .map(|m| {
                let (phrase, weight) = &self.phrases[m.pattern().as_usize()];
                (phrase.as_str(), *weight)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn matcher() -> PhraseMatcher {
        PhraseMatcher::new(vec![
            ("go die".to_string(), -0.3),
            ("kill yourself".to_string(), -0.3),
            ("waste of space".to_string(), -0.3),
        ])
        .unwrap()
    }

    #[test]
    fn matches_on_token_boundaries_only() {
        let m = matcher();
        assert!(m.find_all(&tokens("you should go die")).len() == 1);
        assert!(m.find_all(&tokens("ago dies")).is_empty());
    }

    #[test]
    fn counts_repeated_occurrences() {
        let m = matcher();
        let found = m.find_all(&tokens("go die go die"));
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|(p, _)| *p == "go die"));
    }

    #[test]
    fn single_token_never_matches() {
        assert!(matcher().find_all(&tokens("die")).is_empty());
    }
}
