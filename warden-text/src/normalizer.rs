use std::collections::HashSet;

use warden_core::traits::INormalizer;

use crate::anonymize::anonymize;
use crate::stem::stem;
use crate::stopwords::ENGLISH_STOPWORDS;

/// Reference normalizer: anonymize → lowercase → strip non-letters →
/// tokenize → drop stop words → stem.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: HashSet<String>,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add custom stop words on top of the built-in list.
    pub fn with_stopwords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Cleaned text: the normalized stems joined with single spaces.
    pub fn clean(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl INormalizer for TextNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = anonymize(text).to_lowercase();
        let letters: String = lowered
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();
        letters
            .split_whitespace()
            .filter(|w| !self.is_stopword(w))
            .map(stem)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_order() {
        let n = TextNormalizer::new();
        assert_eq!(
            n.normalize("You are SO annoying!!! Email me at bob@mail.com"),
            vec!["annoy", "email", "email"]
        );
    }

    #[test]
    fn custom_stopwords_are_removed() {
        let n = TextNormalizer::new().with_stopwords(["lol"]);
        assert_eq!(n.normalize("lol that was funny"), vec!["funny"]);
    }

    #[test]
    fn empty_text_yields_no_stems() {
        assert!(TextNormalizer::new().normalize("  !!! 42 ").is_empty());
    }
}
