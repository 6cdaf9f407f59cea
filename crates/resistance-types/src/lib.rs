//! Shared type definitions for the Resistance agent workspace.
//!
//! This crate is the single source of truth for the values exchanged
//! between a game orchestrator and a participating agent: player and game
//! identifiers, the two sides of the game, and the per-round records that
//! agents keep as history.
//!
//! # Modules
//!
//! - [`ids`] -- Player seat indices and per-game UUID identifiers
//! - [`enums`] -- The two sides of the game ([`Side`])
//! - [`records`] -- Vote and mission records plus the belief snapshot

pub mod enums;
pub mod ids;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use enums::Side;
pub use ids::{GameId, PlayerId};
pub use records::{BeliefSnapshot, MissionRecord, SuspicionEntry, VoteRecord};
