use std::collections::{BTreeSet, HashSet};

/// Case-insensitive set of single words.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Membership test on an already lowercased word.
    pub fn contains(&self, word_lower: &str) -> bool {
        self.words.contains(word_lower)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order.
    pub fn sorted(&self) -> BTreeSet<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}
