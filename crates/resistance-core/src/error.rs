//! Error types for the resistance-core crate.

use resistance_agents::AgentError;

use crate::config::ConfigError;

/// Top-level error for host-side setup.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type a harness can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Building an agent failed.
    #[error("agent error: {source}")]
    Agent {
        /// The underlying agent error.
        #[from]
        source: AgentError,
    },

    /// The global tracing subscriber could not be installed.
    #[error("logging error: {message}")]
    Logging {
        /// Description of the subscriber failure.
        message: String,
    },
}
