//! Append-only game history and the authoritative round tally.
//!
//! Vote and mission records are kept in arrival order and never edited.
//! The success/failure counters are overwritten from the orchestrator's
//! running totals after every round rather than accumulated locally.

use resistance_types::{MissionRecord, PlayerId, VoteRecord};

use crate::error::AgentError;

/// Everything the agent has observed during the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    votes: Vec<VoteRecord>,
    missions: Vec<MissionRecord>,
    successful_missions: u32,
    failed_missions: u32,
}

impl GameHistory {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            votes: Vec::new(),
            missions: Vec::new(),
            successful_missions: 0,
            failed_missions: 0,
        }
    }

    /// Append a vote broadcast.
    pub fn record_vote(&mut self, record: VoteRecord) {
        self.votes.push(record);
    }

    /// Append a mission broadcast.
    pub fn record_mission(&mut self, record: MissionRecord) {
        self.missions.push(record);
    }

    /// Overwrite the counters from the orchestrator's round totals.
    pub fn record_round(
        &mut self,
        rounds_complete: u32,
        missions_failed: u32,
    ) -> Result<(), AgentError> {
        let successes = rounds_complete.checked_sub(missions_failed).ok_or(
            AgentError::RoundTallyInvalid {
                rounds_complete,
                missions_failed,
            },
        )?;
        self.successful_missions = successes;
        self.failed_missions = missions_failed;
        Ok(())
    }

    /// All recorded votes, oldest first.
    pub fn votes(&self) -> &[VoteRecord] {
        &self.votes
    }

    /// All recorded missions, oldest first.
    pub fn missions(&self) -> &[MissionRecord] {
        &self.missions
    }

    /// Missions that succeeded, per the last round tally.
    pub const fn successful_missions(&self) -> u32 {
        self.successful_missions
    }

    /// Missions that failed, per the last round tally.
    pub const fn failed_missions(&self) -> u32 {
        self.failed_missions
    }

    /// Number of recorded failed missions `player` was on.
    pub fn failed_appearances(&self, player: PlayerId) -> usize {
        self.missions
            .iter()
            .filter(|mission| mission.failed() && mission.includes(player))
            .count()
    }
}
