//! Decision policies: team proposal, voting, and betrayal.
//!
//! Each policy is a pure function of the agent's role knowledge, beliefs,
//! history, and configuration. Randomized branches draw from the caller's
//! generator so seeded runs are reproducible.

pub mod betray;
pub mod propose;
pub mod vote;

pub use betray::{BetrayalDecision, decide_betrayal};
pub use propose::{infiltrator_team, loyalist_team};
pub use vote::{infiltrator_vote, loyalist_vote};
