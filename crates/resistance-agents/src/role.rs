//! Seating and role knowledge for the current game.
//!
//! [`Seating`] validates every player index the orchestrator hands over.
//! [`RoleKnowledge`] captures what the agent is allowed to know about the
//! other players: a loyalist keeps nothing from the infiltrator list, so
//! no loyalist decision path can read it.

use std::collections::BTreeSet;

use resistance_types::{PlayerId, Side};

use crate::error::AgentError;

/// Table size and the agent's own seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seating {
    player_count: usize,
    own_id: PlayerId,
}

impl Seating {
    /// Validate and create the seating for a new game.
    pub fn new(player_count: usize, own_id: PlayerId) -> Result<Self, AgentError> {
        if own_id.index() >= player_count {
            return Err(AgentError::UnknownPlayer {
                player: own_id,
                player_count,
            });
        }
        Ok(Self {
            player_count,
            own_id,
        })
    }

    /// Number of players at the table.
    pub const fn player_count(self) -> usize {
        self.player_count
    }

    /// The agent's own seat.
    pub const fn own_id(self) -> PlayerId {
        self.own_id
    }

    /// Returns `true` if `player` is the agent itself.
    pub fn is_self(self, player: PlayerId) -> bool {
        player == self.own_id
    }

    /// Every seat other than the agent's own, in seat order.
    pub fn opponents(self) -> impl Iterator<Item = PlayerId> {
        let own_id = self.own_id;
        (0..self.player_count)
            .map(PlayerId)
            .filter(move |player| *player != own_id)
    }

    /// Check that `player` is seated at this table.
    pub fn check(self, player: PlayerId) -> Result<(), AgentError> {
        if player.index() < self.player_count {
            Ok(())
        } else {
            Err(AgentError::UnknownPlayer {
                player,
                player_count: self.player_count,
            })
        }
    }

    /// Check a team and its proposer.
    pub fn check_team(self, team: &[PlayerId], proposer: PlayerId) -> Result<(), AgentError> {
        self.check(proposer)?;
        team.iter().try_for_each(|player| self.check(*player))
    }
}

/// What the agent knows about everyone's allegiance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleKnowledge {
    /// Playing loyalist: no ground truth about anyone.
    Loyalist,
    /// Playing infiltrator: the full infiltrator roster, self included.
    Infiltrator {
        /// Every infiltrator seat.
        allies: BTreeSet<PlayerId>,
    },
}

impl RoleKnowledge {
    /// Derive the agent's role from the orchestrator's infiltrator list.
    ///
    /// The list is only retained (and only bounds-checked) when the agent's
    /// own seat is on it.
    pub fn assign(seating: Seating, infiltrators: &[PlayerId]) -> Result<Self, AgentError> {
        if !infiltrators.contains(&seating.own_id()) {
            return Ok(Self::Loyalist);
        }
        let mut allies = BTreeSet::new();
        for player in infiltrators {
            seating.check(*player)?;
            allies.insert(*player);
        }
        Ok(Self::Infiltrator { allies })
    }

    /// The agent's side.
    pub const fn side(&self) -> Side {
        match self {
            Self::Loyalist => Side::Loyalist,
            Self::Infiltrator { .. } => Side::Infiltrator,
        }
    }

    /// The infiltrator roster, if the agent is an infiltrator.
    pub const fn allies(&self) -> Option<&BTreeSet<PlayerId>> {
        match self {
            Self::Loyalist => None,
            Self::Infiltrator { allies } => Some(allies),
        }
    }
}
