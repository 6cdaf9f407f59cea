//! The callback contract between a game orchestrator and a participant.
//!
//! The orchestrator drives every participant through the same per-game
//! sequence:
//!
//! ```text
//! new_game
//! repeat per round:
//!     propose_mission (proposer only)
//!     vote            (everyone)
//!     vote_outcome    (broadcast)
//!     betray          (team members, if the vote passed)
//!     mission_outcome (broadcast, if the vote passed)
//!     round_outcome   (broadcast)
//! game_outcome
//! ```
//!
//! Control only flows from the orchestrator into the participant. Any
//! callback may report an [`AgentError`] when the orchestrator breaks the
//! contract (wrong order, unknown seat, malformed vote vector).

use resistance_types::PlayerId;

use crate::error::AgentError;

/// A seat at the table, driven by an external orchestrator.
pub trait Participant {
    /// Display name of the participant.
    fn name(&self) -> &str;

    /// Reset all state for a fresh game.
    ///
    /// `infiltrators` is the full infiltrator roster when this participant
    /// is one of them; a loyalist must not use it.
    fn new_game(
        &mut self,
        player_count: usize,
        own_id: PlayerId,
        infiltrators: &[PlayerId],
    ) -> Result<(), AgentError>;

    /// Returns `true` if this participant is an infiltrator in the current
    /// game. `false` before the first game.
    fn is_spy(&self) -> bool;

    /// Propose a team of exactly `team_size` distinct players.
    fn propose_mission(
        &mut self,
        team_size: usize,
        betrayals_required: u32,
    ) -> Result<Vec<PlayerId>, AgentError>;

    /// Vote on a proposed team (`true` = approve).
    fn vote(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        betrayals_required: u32,
    ) -> Result<bool, AgentError>;

    /// Observe how everyone voted on a proposal.
    fn vote_outcome(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        votes: &[bool],
    ) -> Result<(), AgentError>;

    /// Decide whether to betray a mission this participant is on.
    fn betray(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        betrayals_required: u32,
    ) -> Result<bool, AgentError>;

    /// Observe the result of a mission.
    fn mission_outcome(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        betrayals: u32,
        success: bool,
    ) -> Result<(), AgentError>;

    /// Observe the running round tally.
    fn round_outcome(&mut self, rounds_complete: u32, missions_failed: u32)
    -> Result<(), AgentError>;

    /// Observe the end of the game and the revealed infiltrator roster.
    fn game_outcome(&mut self, spies_win: bool, infiltrators: &[PlayerId])
    -> Result<(), AgentError>;
}
