//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `resistance-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and provides a loader that reads and validates the file.
//! Every key is optional; missing sections fall back to their defaults.

use std::path::Path;

use resistance_agents::AgentConfig;
use serde::Deserialize;

/// Environment variable that overrides `random.seed`.
pub const SEED_ENV_VAR: &str = "RESISTANCE_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {variable}")]
    InvalidOverride {
        /// The environment variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The `agent` section failed validation.
    #[error("invalid agent section: {reason}")]
    InvalidAgent {
        /// Description of the rejected value.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `resistance-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResistanceConfig {
    /// Belief-update and decision tunables.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Random generator seeding.
    #[serde(default)]
    pub random: RandomConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ResistanceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `RESISTANCE_SEED` overrides `random.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or a
    /// validation error for out-of-range values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config
            .random
            .apply_seed_override(std::env::var(SEED_ENV_VAR).ok())?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidAgent`] if the agent section fails validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config
            .agent
            .validate()
            .map_err(|source| ConfigError::InvalidAgent {
                reason: source.to_string(),
            })?;
        Ok(config)
    }
}

/// Random generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RandomConfig {
    /// Base seed for reproducible runs. Each seat derives its own seed
    /// from it. `None` seeds every agent from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Replace the seed with `value` when present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `value` is not a `u64`.
    pub fn apply_seed_override(&mut self, value: Option<String>) -> Result<(), ConfigError> {
        let Some(value) = value else {
            return Ok(());
        };
        let seed = value
            .trim()
            .parse::<u64>()
            .map_err(|_parse| ConfigError::InvalidOverride {
                variable: SEED_ENV_VAR,
                value: value.clone(),
            })?;
        self.seed = Some(seed);
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
agent:
  confirm_threshold: 0.8
  approval_bump: 0.1
  critical_mission_count: 3

random:
  seed: 123

logging:
  level: "debug"
  json: true
"#;

        let config = ResistanceConfig::parse(yaml);
        assert!(config.is_ok(), "parse failed: {config:?}");
        let config = config.ok().unwrap_or_default();

        assert!((config.agent.confirm_threshold - 0.8).abs() < f64::EPSILON);
        assert!((config.agent.approval_bump - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.agent.critical_mission_count, 3);
        // Unspecified agent keys keep their defaults.
        assert!((config.agent.success_relief - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.random.seed, Some(123));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "random:\n  seed: 7\n";
        let config = ResistanceConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.random.seed, Some(7));
        assert_eq!(config.agent, AgentConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn parse_empty_mapping() {
        let config = ResistanceConfig::parse("{}");
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();
        assert_eq!(config.random.seed, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_rejects_invalid_probability() {
        let yaml = "agent:\n  noise_betray_chance: 1.5\n";
        let config = ResistanceConfig::parse(yaml);
        assert!(matches!(config, Err(ConfigError::InvalidAgent { .. })));
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let config = ResistanceConfig::parse("agent: [unclosed");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn seed_override_replaces_seed() {
        let mut random = RandomConfig { seed: Some(1) };
        assert!(random.apply_seed_override(Some(" 99 ".to_owned())).is_ok());
        assert_eq!(random.seed, Some(99));

        assert!(random.apply_seed_override(None).is_ok());
        assert_eq!(random.seed, Some(99));
    }

    #[test]
    fn seed_override_rejects_garbage() {
        let mut random = RandomConfig::default();
        let result = random.apply_seed_override(Some("not-a-seed".to_owned()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride {
                variable: SEED_ENV_VAR,
                ..
            })
        ));
        assert_eq!(random.seed, None);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("resistance-config.yaml");
        if path.exists() {
            let config = ResistanceConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
