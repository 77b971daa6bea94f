//! Malformed input errors.

use super::error_code::{self, WardenErrorCode};

/// Raised for datasets the pipeline cannot interpret at all. A single bad
/// record inside an otherwise valid dataset is skipped, not raised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("dataset must be a JSON array of records, found {found}")]
    NotAList { found: String },

    #[error("record {index} has no 'content' or 'text' field")]
    MissingText { index: usize },

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
}

impl WardenErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
