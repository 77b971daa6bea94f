/// Sentinel substituted for any content id, author id, or content type that
/// could not be resolved for a record.
pub const UNSPECIFIED: &str = "Unspecified";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "WARDEN_LOG";
