//! Lexicon table errors. All of them are raised while the store is built,
//! before any record is scored.

use super::error_code::{self, WardenErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon entry has an empty phrase")]
    EmptyPhrase,

    #[error("lexicon weight for '{phrase}' must be negative, got {weight}")]
    NonNegativeWeight { phrase: String, weight: f64 },

    #[error("lexicon weight for '{phrase}' must be finite")]
    NonFiniteWeight { phrase: String },

    #[error("duplicate lexicon phrase '{phrase}' with conflicting weights {first} and {second}")]
    ConflictingDuplicate {
        phrase: String,
        first: f64,
        second: f64,
    },

    #[error("context word '{word}' is not a lexicon phrase")]
    ContextWordNotInLexicon { word: String },

    #[error("phrase matcher could not be built: {message}")]
    MatcherBuild { message: String },
}

impl WardenErrorCode for LexiconError {
    fn error_code(&self) -> &'static str {
        error_code::LEXICON_ERROR
    }
}
