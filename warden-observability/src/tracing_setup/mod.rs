//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use warden_core::config::ObservabilityConfig;
use warden_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize tracing with default configuration.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize the global subscriber.
///
/// `WARDEN_LOG` takes precedence over `config.log_level`. Events go to
/// stderr so JSON reports on stdout stay clean. Idempotent: only the first
/// call installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .try_init()
        };
        if installed.is_ok() {
            tracing::debug!(json = config.json, "tracing initialized");
        }
    });
}
