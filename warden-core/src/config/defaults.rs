// Single source of truth for all default values.

// --- Severity: HIGH ---
pub const DEFAULT_HIGH_TOTAL_NEGATIVE: f64 = 1.5;
pub const DEFAULT_HIGH_TOTAL_NEGATIVE_WITHOUT_ADJECTIVES: f64 = 2.5;
pub const DEFAULT_HIGH_FLAGGED_ENTITIES: usize = 2;
pub const DEFAULT_HIGH_SENTIMENT_BALANCE: f64 = -2.0;

// --- Severity: LOW ---
pub const DEFAULT_LOW_TOTAL_NEGATIVE_FLOOR: f64 = 0.3;
pub const DEFAULT_LOW_TOTAL_NEGATIVE_WITHOUT_ADJECTIVES: f64 = 1.5;
pub const DEFAULT_LOW_FLAGGED_ENTITIES: usize = 1;
pub const DEFAULT_LOW_SENTIMENT_BALANCE_FLOOR: f64 = -0.5;
pub const DEFAULT_NEUTRAL_CEILING: f64 = 0.7;

// --- Severity: ZERO ---
pub const DEFAULT_ZERO_POSITIVE_FLOOR: f64 = 0.8;

// --- Lexicon ---
pub const DEFAULT_CONTEXT_WORDS: [&str; 4] = ["stupid", "dumb", "annoying", "loser"];

// --- Incidents ---
pub const DEFAULT_INCIDENT_ID_OFFSET: u64 = 10_000;
pub const DEFAULT_INCIDENT_ID_PREFIX: &str = "i";

// --- Pipeline ---
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_INCLUDE_TFIDF: bool = true;
pub const DEFAULT_TFIDF_MAX_FEATURES: usize = 500;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
