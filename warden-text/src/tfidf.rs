//! Bag-of-words TF-IDF over cleaned texts.
//!
//! Vocabulary is the `max_features` most frequent terms of the corpus (ties
//! broken alphabetically). Idf is smoothed, `ln((1 + n) / (1 + df)) + 1`,
//! and each row is L2-normalized.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

/// Fitted vocabulary plus one sparse row per document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TfidfMatrix {
    pub vocabulary: Vec<String>,
    pub rows: Vec<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features: max_features.max(1),
        }
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Fit on `documents` and return their weights.
    pub fn fit_transform(&self, documents: &[Vec<String>]) -> TfidfMatrix {
        let mut term_frequency: HashMap<&str, usize> = HashMap::new();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let mut seen = HashSet::new();
            for term in doc {
                *term_frequency.entry(term.as_str()).or_default() += 1;
                if seen.insert(term.as_str()) {
                    *document_frequency.entry(term.as_str()).or_default() += 1;
                }
            }
        }

        let mut ranked: Vec<(&str, usize)> = term_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);
        let mut vocabulary: Vec<String> = ranked.iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();

        let n = documents.len() as f64;
        let idf: HashMap<&str, f64> = vocabulary
            .iter()
            .map(|term| {
                let df = document_frequency.get(term.as_str()).copied().unwrap_or(0) as f64;
                (term.as_str(), ((1.0 + n) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        let rows = documents
            .iter()
            .map(|doc| {
                let mut row: BTreeMap<String, f64> = BTreeMap::new();
                for term in doc {
                    if let Some(weight) = idf.get(term.as_str()) {
                        *row.entry(term.clone()).or_default() += weight;
                    }
                }
                let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.values_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        tracing::debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "tf-idf fitted"
        );
        TfidfMatrix { vocabulary, rows }
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(warden_core::config::defaults::DEFAULT_TFIDF_MAX_FEATURES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&str]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.split_whitespace().map(String::from).collect())
            .collect()
    }

    #[test]
    fn rows_are_unit_length() {
        let m = TfidfVectorizer::new(10).fit_transform(&docs(&["loser loser dumb", "dumb kind"]));
        for row in &m.rows {
            let norm: f64 = row.values().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn vocabulary_cap_keeps_most_frequent_terms() {
        let m = TfidfVectorizer::new(2).fit_transform(&docs(&["a a a b b c", "c d"]));
        assert_eq!(m.vocabulary, vec!["a", "b"]);
    }

    #[test]
    fn ties_break_alphabetically() {
        let m = TfidfVectorizer::new(1).fit_transform(&docs(&["zeta alpha"]));
        assert_eq!(m.vocabulary, vec!["alpha"]);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let m = TfidfVectorizer::new(10).fit_transform(&docs(&["common rare", "common"]));
        let row = &m.rows[0];
        assert!(row["rare"] > row["common"]);
    }

    #[test]
    fn empty_document_has_empty_row() {
        let m = TfidfVectorizer::new(10).fit_transform(&docs(&["", "x"]));
        assert!(m.rows[0].is_empty());
    }
}
