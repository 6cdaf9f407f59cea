//! Per-round records and the post-game belief snapshot.
//!
//! Records are append-only: an agent pushes one [`VoteRecord`] per vote
//! broadcast and one [`MissionRecord`] per mission broadcast, and never
//! rewrites them.

use serde::{Deserialize, Serialize};

use crate::enums::Side;
use crate::ids::{GameId, PlayerId};

/// The result of one team vote as broadcast by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// The proposed team.
    pub team: Vec<PlayerId>,
    /// The participant who proposed the team.
    pub proposer: PlayerId,
    /// Every participant's vote, indexed by seat (`true` = approve).
    pub votes: Vec<bool>,
}

impl VoteRecord {
    /// Participants who voted to approve.
    pub fn approvers(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.votes
            .iter()
            .enumerate()
            .filter(|(_, approved)| **approved)
            .map(|(seat, _)| PlayerId(seat))
    }
}

/// The result of one executed mission as broadcast by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRecord {
    /// The team that went on the mission.
    pub team: Vec<PlayerId>,
    /// The participant who proposed the team.
    pub proposer: PlayerId,
    /// Number of betrayals played on the mission.
    pub betrayals: u32,
    /// Whether the mission succeeded.
    pub success: bool,
}

impl MissionRecord {
    /// Returns `true` if `player` was on this mission's team.
    pub fn includes(&self, player: PlayerId) -> bool {
        self.team.contains(&player)
    }

    /// Returns `true` if the mission failed.
    pub const fn failed(&self) -> bool {
        !self.success
    }
}

/// One row of the suspicion table in a [`BeliefSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspicionEntry {
    /// The participant the score refers to.
    pub player: PlayerId,
    /// Suspicion score in [0.0, 1.0].
    pub score: f64,
}

/// A read-only copy of an agent's belief state.
///
/// Taken at any point during or after a game for inspection, typically
/// right after the game outcome has been assimilated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeliefSnapshot {
    /// The game this snapshot belongs to.
    pub game_id: GameId,
    /// The agent's own seat.
    pub own_id: PlayerId,
    /// The agent's side for this game.
    pub side: Side,
    /// Suspicion score for every other participant, ordered by seat.
    pub suspicion: Vec<SuspicionEntry>,
    /// Participants confirmed as infiltrators by mission evidence.
    pub known_infiltrators: Vec<PlayerId>,
    /// Missions that succeeded, per the last round tally.
    pub successful_missions: u32,
    /// Missions that failed, per the last round tally.
    pub failed_missions: u32,
    /// Number of votes recorded.
    pub votes_recorded: usize,
    /// Number of missions recorded.
    pub missions_recorded: usize,
}
