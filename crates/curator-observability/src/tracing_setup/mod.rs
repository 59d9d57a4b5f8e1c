//! Tracing setup: subscriber initialization, span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use curator_core::config::ObservabilityConfig;
use curator_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// `CURATOR_LOG` wins over `config.log_level` when set and valid. JSON output
/// is used when `config.json` is true, human-readable lines otherwise.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config.log_level);
        install(filter, config.json);
    });
}

/// Initialize tracing with an explicit filter string (for testing or embedding).
/// Ignores `CURATOR_LOG`.
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    INIT.call_once(|| {
        install(EnvFilter::new(filter), json);
    });
}

fn resolve_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn install(filter: EnvFilter, json: bool) {
    // A host application may already own the global subscriber.
    let result = if json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init()
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
