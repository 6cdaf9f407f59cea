//! Host-side glue for embedding Resistance agents in a game harness.
//!
//! The decision engine itself lives in `resistance-agents` and performs no
//! I/O. This crate covers what a host needs around it: loading tunables
//! from YAML, initializing structured logging, and building one
//! independently seeded agent per seat.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `resistance-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Top-level error type ([`CoreError`]).
//! - [`logging`] -- `tracing-subscriber` initialization.
//! - [`spawner`] -- Per-seat agent construction with derived seeds.
//!
//! [`CoreError`]: error::CoreError

pub mod config;
pub mod error;
pub mod logging;
pub mod spawner;

pub use config::{ConfigError, LoggingConfig, RandomConfig, ResistanceConfig};
pub use error::CoreError;
pub use logging::init_logging;
pub use spawner::{seat_seed, spawn_agents};
