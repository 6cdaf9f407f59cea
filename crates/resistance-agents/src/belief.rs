//! Suspicion bookkeeping for every other participant.
//!
//! The agent keeps one score per opponent in [0.0, 1.0] (higher = more
//! likely an infiltrator) and an append-only set of players confirmed as
//! infiltrators by mission evidence. Scores move only through the update
//! rules in this module, and every update clamps before storing.
//!
//! # Update rules
//!
//! | Observation | Effect |
//! |---|---|
//! | Vote broadcast | Each other team member who approved their own team: `+approval_bump` |
//! | Failed mission | `betrayals / eligible` to each unconfirmed non-self member; above `confirm_threshold` confirms |
//! | Successful mission | `-success_relief` to each unconfirmed non-self member |
//! | Game over | One retroactive pass over the mission history (see [`BeliefState::revise_as_loyalist`] and [`BeliefState::revise_as_infiltrator`]) |
//!
//! # Invariants
//!
//! - Scores are clamped to [0.0, 1.0].
//! - The agent never holds a score for itself.
//! - Confirmation is never revoked within a game.

use std::collections::{BTreeMap, BTreeSet};

use resistance_types::{MissionRecord, PlayerId, Side, VoteRecord};

use crate::error::AgentError;
use crate::role::Seating;

/// Lowest possible suspicion score.
const MIN_SCORE: f64 = 0.0;

/// Highest possible suspicion score.
const MAX_SCORE: f64 = 1.0;

/// Per-opponent suspicion scores and confirmed infiltrators.
#[derive(Debug, Clone, PartialEq)]
pub struct BeliefState {
    own_id: PlayerId,
    suspicion: BTreeMap<PlayerId, f64>,
    confirmed: BTreeSet<PlayerId>,
}

impl BeliefState {
    /// Start a game with every opponent at zero suspicion.
    pub fn new(seating: Seating) -> Self {
        Self {
            own_id: seating.own_id(),
            suspicion: seating.opponents().map(|player| (player, MIN_SCORE)).collect(),
            confirmed: BTreeSet::new(),
        }
    }

    /// Suspicion score for `player`, or `None` for the agent itself.
    pub fn score(&self, player: PlayerId) -> Option<f64> {
        self.suspicion.get(&player).copied()
    }

    /// All suspicion scores, ordered by seat.
    pub const fn scores(&self) -> &BTreeMap<PlayerId, f64> {
        &self.suspicion
    }

    /// Returns `true` if `player` has been confirmed as an infiltrator.
    pub fn is_confirmed(&self, player: PlayerId) -> bool {
        self.confirmed.contains(&player)
    }

    /// Players confirmed as infiltrators, ordered by seat.
    pub const fn confirmed(&self) -> &BTreeSet<PlayerId> {
        &self.confirmed
    }

    /// Opponents ordered from least to most suspected.
    ///
    /// Ties keep seat order.
    pub fn ranked(&self) -> Vec<PlayerId> {
        let mut ranked: Vec<(PlayerId, f64)> =
            self.suspicion.iter().map(|(player, score)| (*player, *score)).collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.into_iter().map(|(player, _)| player).collect()
    }

    /// Mean suspicion across `team`, excluding the agent itself.
    ///
    /// Returns `Ok(None)` when nobody but the agent is on the team.
    pub fn mean_suspicion(&self, team: &[PlayerId]) -> Result<Option<f64>, AgentError> {
        let scores: Vec<f64> = team
            .iter()
            .filter(|player| **player != self.own_id)
            .map(|player| self.score(*player).unwrap_or(MIN_SCORE))
            .collect();
        if scores.is_empty() {
            return Ok(None);
        }
        let count = team_size_as_f64(scores.len())?;
        Ok(Some(scores.iter().sum::<f64>() / count))
    }

    /// Assimilate a vote broadcast.
    ///
    /// Every other participant who approved a team they sit on gains
    /// `bump` suspicion.
    pub fn observe_vote(&mut self, record: &VoteRecord, bump: f64) {
        let supporters: Vec<PlayerId> = record
            .approvers()
            .filter(|player| *player != self.own_id && record.team.contains(player))
            .collect();
        for player in supporters {
            self.shift(player, bump);
        }
    }

    /// Assimilate a failed mission.
    ///
    /// Spreads `betrayals` evenly over the unconfirmed team members other
    /// than the agent. Anyone whose score then exceeds `confirm_threshold`
    /// is confirmed. Returns the newly confirmed players.
    pub fn observe_failure(
        &mut self,
        team: &[PlayerId],
        betrayals: u32,
        confirm_threshold: f64,
    ) -> Result<Vec<PlayerId>, AgentError> {
        let eligible = self.unconfirmed_teammates(team);
        if eligible.is_empty() {
            return Ok(Vec::new());
        }

        let increment = f64::from(betrayals) / team_size_as_f64(eligible.len())?;
        let mut newly_confirmed = Vec::new();
        for player in eligible {
            let score = self.shift(player, increment);
            if score > confirm_threshold && self.confirmed.insert(player) {
                newly_confirmed.push(player);
            }
        }
        Ok(newly_confirmed)
    }

    /// Assimilate a successful mission: each unconfirmed team member other
    /// than the agent loses `relief` suspicion.
    pub fn observe_success(&mut self, team: &[PlayerId], relief: f64) {
        for player in self.unconfirmed_teammates(team) {
            self.shift(player, -relief);
        }
    }

    /// Post-game revision when the agent played loyalist.
    ///
    /// If the infiltrators won, every unconfirmed member of each failed
    /// mission gains `blame` (once per failed mission). If the loyalists
    /// won, every past team member outside the revealed infiltrator set
    /// loses `exoneration` (once per mission appearance).
    pub fn revise_as_loyalist(
        &mut self,
        missions: &[MissionRecord],
        winner: Side,
        revealed: &BTreeSet<PlayerId>,
        blame: f64,
        exoneration: f64,
    ) {
        for mission in missions {
            for player in &mission.team {
                match winner {
                    Side::Infiltrator => {
                        if mission.failed() && !self.is_confirmed(*player) {
                            self.shift(*player, blame);
                        }
                    }
                    Side::Loyalist => {
                        if !revealed.contains(player) {
                            self.shift(*player, -exoneration);
                        }
                    }
                }
            }
        }
    }

    /// Post-game revision when the agent played infiltrator.
    ///
    /// Allies on failed missions in a game the infiltrators won lose
    /// `adjustment`; allies on successful missions in a game the loyalists
    /// won gain it.
    pub fn revise_as_infiltrator(
        &mut self,
        missions: &[MissionRecord],
        winner: Side,
        allies: &BTreeSet<PlayerId>,
        adjustment: f64,
    ) {
        for mission in missions {
            for player in mission.team.iter().filter(|player| allies.contains(*player)) {
                match winner {
                    Side::Infiltrator if mission.failed() => {
                        self.shift(*player, -adjustment);
                    }
                    Side::Loyalist if mission.success => {
                        self.shift(*player, adjustment);
                    }
                    Side::Infiltrator | Side::Loyalist => {}
                }
            }
        }
    }

    /// Distinct team members other than the agent that are not confirmed,
    /// in seat order.
    fn unconfirmed_teammates(&self, team: &[PlayerId]) -> BTreeSet<PlayerId> {
        team.iter()
            .copied()
            .filter(|player| *player != self.own_id && !self.is_confirmed(*player))
            .collect()
    }

    /// Move one score by `delta`, clamped. Returns the stored score.
    ///
    /// The agent's own seat has no entry and is left untouched.
    fn shift(&mut self, player: PlayerId, delta: f64) -> f64 {
        match self.suspicion.get_mut(&player) {
            Some(score) => {
                *score = (*score + delta).clamp(MIN_SCORE, MAX_SCORE);
                *score
            }
            None => MIN_SCORE,
        }
    }
}

/// Convert a member count to `f64` for averaging.
fn team_size_as_f64(len: usize) -> Result<f64, AgentError> {
    u32::try_from(len)
        .map(f64::from)
        .map_err(|source| AgentError::ArithmeticOverflow {
            context: format!("team of {len} members: {source}"),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
