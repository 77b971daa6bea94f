//! # warden-text
//!
//! Deterministic reference implementations of the collaborator traits in
//! `warden-core`, so the engine runs end-to-end without a statistical NLP stack:
//! - [`TextNormalizer`]: anonymize, clean, drop stop words, light stemming.
//! - [`HeuristicAnnotator`]: closed-class POS tagging and PERSON runs.
//! - [`LexiconSentimentScorer`]: word-proportion sentiment over the lexicons.
//! - [`TfidfVectorizer`]: capped-vocabulary TF-IDF over cleaned texts.

pub mod annotator;
pub mod anonymize;
pub mod normalizer;
pub mod sentiment;
pub mod stem;
pub mod stopwords;
pub mod tfidf;

pub use annotator::HeuristicAnnotator;
pub use normalizer::TextNormalizer;
pub use sentiment::LexiconSentimentScorer;
pub use tfidf::{TfidfMatrix, TfidfVectorizer};
