//! WardenErrorCode trait for machine-readable CLI output.

/// Every error enum implements this to provide a stable error code string
/// that scripts consuming the CLI can match on.
pub trait WardenErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LEXICON_ERROR: &str = "LEXICON_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
