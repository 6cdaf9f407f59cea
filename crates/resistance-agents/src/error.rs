//! Error types for the resistance-agents crate.
//!
//! The orchestrator is trusted to drive the callbacks in the documented
//! order with in-range indices. When it does not, the agent reports a
//! typed error instead of panicking or silently corrupting its beliefs.

use resistance_types::PlayerId;

/// Errors that can occur while an agent handles an orchestrator callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// A game callback arrived before `new_game`.
    #[error("no game in progress: call new_game first")]
    NoGameInProgress,

    /// A player index outside `0..player_count` was supplied.
    #[error("unknown player {player}: game has {player_count} players")]
    UnknownPlayer {
        /// The offending index.
        player: PlayerId,
        /// Number of players in the current game.
        player_count: usize,
    },

    /// A requested team size cannot be seated.
    #[error("invalid team size {team_size} for a {player_count}-player game")]
    InvalidTeamSize {
        /// The requested team size.
        team_size: usize,
        /// Number of players in the current game.
        player_count: usize,
    },

    /// The vote vector does not have one entry per player.
    #[error("vote vector has {actual} entries, expected {expected}")]
    VoteCountMismatch {
        /// Number of players in the current game.
        expected: usize,
        /// Length of the vector received.
        actual: usize,
    },

    /// The orchestrator reported more failed missions than completed rounds.
    #[error("round tally invalid: {missions_failed} failures in {rounds_complete} rounds")]
    RoundTallyInvalid {
        /// Rounds completed so far.
        rounds_complete: u32,
        /// Missions failed so far.
        missions_failed: u32,
    },

    /// The agent configuration contains an out-of-range value.
    #[error("invalid agent config: {reason}")]
    InvalidConfig {
        /// Description of the rejected value.
        reason: String,
    },

    /// An arithmetic overflow occurred during a belief computation.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
