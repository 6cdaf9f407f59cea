//! Belief tracking and decision policies for a Resistance game participant.
//!
//! This crate contains the whole decision engine for one seat in a
//! hidden-role game of loyalists versus infiltrators. It performs no I/O:
//! an external orchestrator drives it through the [`Participant`]
//! callbacks, and the agent answers from its own per-game state.
//!
//! # Modules
//!
//! - [`agent`] -- [`HeuristicAgent`], the [`Participant`] implementation
//! - [`belief`] -- Suspicion scores and confirmed infiltrators ([`BeliefState`])
//! - [`config`] -- Tunable thresholds and probabilities ([`AgentConfig`])
//! - [`error`] -- Error types for contract violations ([`AgentError`])
//! - [`history`] -- Append-only vote and mission records ([`GameHistory`])
//! - [`participant`] -- The orchestrator callback contract ([`Participant`])
//! - [`policy`] -- Team proposal, voting, and betrayal decisions
//! - [`role`] -- Seating validation and role knowledge ([`RoleKnowledge`])

pub mod agent;
pub mod belief;
pub mod config;
pub mod error;
pub mod history;
pub mod participant;
pub mod policy;
pub mod role;

#[cfg(test)]
mod testing;

// Re-export primary types at crate root for convenience.
pub use agent::{DEFAULT_AGENT_NAME, GameState, HeuristicAgent};
pub use belief::BeliefState;
pub use config::AgentConfig;
pub use error::AgentError;
pub use history::GameHistory;
pub use participant::Participant;
pub use policy::BetrayalDecision;
pub use role::{RoleKnowledge, Seating};
