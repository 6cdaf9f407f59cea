//! Identifier types.
//!
//! Players are identified by their seat index, which the orchestrator
//! assigns at game start and which also indexes the vote vector broadcast
//! after every proposal. Games get a UUID v7 so log lines from one game can
//! be correlated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seat index of a participant in the current game.
///
/// Valid indices are `0..player_count`. The same index addresses the
/// participant's entry in a vote vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Create a player identifier from a seat index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Return the seat index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for PlayerId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Unique identifier for a single game, regenerated by every `new_game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for GameId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
