//! Structured logging setup.
//!
//! The agent crates only emit `tracing` events. A host calls
//! [`init_logging`] once at startup to install a global `fmt` subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::CoreError;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. With `config.json`
/// set, events are written as JSON lines.
///
/// # Errors
///
/// Returns [`CoreError::Logging`] if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|source| CoreError::Logging {
        message: source.to_string(),
    })
}
