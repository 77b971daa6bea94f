pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod lexicon_error;

pub use config_error::ConfigError;
pub use error_code::WardenErrorCode;
pub use input_error::InputError;
pub use lexicon_error::LexiconError;

/// Top-level error for the Warden engine.
///
/// Subsystem errors convert into this via `#[from]`, so callers can use `?`
/// across crate boundaries.
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("lexicon error: {0}")]
    LexiconError(#[from] LexiconError),

    #[error("input error: {0}")]
    InputError(#[from] InputError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error at {path}: {message}")]
    IoError { path: String, message: String },
}

impl WardenError {
    /// Wrap a `std::io::Error` together with the path it occurred on.
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        WardenError::IoError {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl WardenErrorCode for WardenError {
    fn error_code(&self) -> &'static str {
        match self {
            WardenError::ConfigError(e) => e.error_code(),
            WardenError::LexiconError(e) => e.error_code(),
            WardenError::InputError(e) => e.error_code(),
            WardenError::SerializationError(_) => error_code::SERIALIZATION_ERROR,
            WardenError::IoError { .. } => error_code::IO_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type WardenResult<T> = Result<T, WardenError>;
