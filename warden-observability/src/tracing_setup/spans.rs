//! Span definitions per operation: validation, decision, batch.

/// Create a validation span for one record.
#[macro_export]
macro_rules! validation_span {
    ($index:expr, $token_count:expr) => {
        tracing::debug_span!("warden.validation", index = $index, token_count = $token_count)
    };
}

/// Create a severity decision span.
#[macro_export]
macro_rules! decision_span {
    ($index:expr) => {
        tracing::debug_span!("warden.decision", index = $index)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($record_count:expr, $parallel:expr) => {
        tracing::info_span!("warden.batch", record_count = $record_count, parallel = $parallel)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VALIDATION: &str = "warden.validation";
    pub const DECISION: &str = "warden.decision";
    pub const BATCH: &str = "warden.batch";
}
