//! The heuristic agent: one seat's belief-and-decision engine.
//!
//! [`HeuristicAgent`] implements [`Participant`] by combining three pieces
//! of per-game state, all rebuilt from scratch by every `new_game`:
//!
//! - [`RoleKnowledge`] -- own side and, for infiltrators, the roster.
//! - [`BeliefState`] -- suspicion per opponent and confirmed infiltrators.
//! - [`GameHistory`] -- vote and mission records plus the round tally.
//!
//! Decisions are delegated to the pure functions in [`crate::policy`].
//! The agent owns its random generator, so independent agents never share
//! random state and a seeded agent replays identically.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use resistance_types::{
    BeliefSnapshot, GameId, MissionRecord, PlayerId, Side, SuspicionEntry, VoteRecord,
};
use tracing::{debug, info};

use crate::belief::BeliefState;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::history::GameHistory;
use crate::participant::Participant;
use crate::policy;
use crate::role::{RoleKnowledge, Seating};

/// Name used by [`HeuristicAgent::default`].
pub const DEFAULT_AGENT_NAME: &str = "HeuristicAgent";

/// Everything the agent knows about the game in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    game_id: GameId,
    seating: Seating,
    role: RoleKnowledge,
    belief: BeliefState,
    history: GameHistory,
    winner: Option<Side>,
}

impl GameState {
    fn new(seating: Seating, role: RoleKnowledge) -> Self {
        Self {
            game_id: GameId::new(),
            seating,
            role,
            belief: BeliefState::new(seating),
            history: GameHistory::new(),
            winner: None,
        }
    }

    /// Identifier assigned to this game.
    pub const fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Table size and own seat.
    pub const fn seating(&self) -> Seating {
        self.seating
    }

    /// Own side and role knowledge.
    pub const fn role(&self) -> &RoleKnowledge {
        &self.role
    }

    /// Suspicion scores and confirmed infiltrators.
    pub const fn belief(&self) -> &BeliefState {
        &self.belief
    }

    /// Vote and mission records plus the round tally.
    pub const fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Winning side, once the game outcome has been received.
    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }

    fn snapshot(&self) -> BeliefSnapshot {
        BeliefSnapshot {
            game_id: self.game_id,
            own_id: self.seating.own_id(),
            side: self.role.side(),
            suspicion: self
                .belief
                .scores()
                .iter()
                .map(|(player, score)| SuspicionEntry {
                    player: *player,
                    score: *score,
                })
                .collect(),
            known_infiltrators: self.belief.confirmed().iter().copied().collect(),
            successful_missions: self.history.successful_missions(),
            failed_missions: self.history.failed_missions(),
            votes_recorded: self.history.votes().len(),
            missions_recorded: self.history.missions().len(),
        }
    }
}

/// A participant that tracks suspicion heuristically and plays both roles.
///
/// Generic over its random generator so tests can inject a fixed or
/// seeded source.
#[derive(Debug)]
pub struct HeuristicAgent<R = SmallRng> {
    name: String,
    config: AgentConfig,
    rng: R,
    game: Option<GameState>,
}

impl<R: Rng> HeuristicAgent<R> {
    /// Create an agent with an explicit configuration and generator.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] if `config` fails validation.
    pub fn new(name: impl Into<String>, config: AgentConfig, rng: R) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            rng,
            game: None,
        })
    }

    /// The agent's configuration.
    pub const fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// State of the current (or most recently finished) game.
    pub const fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    /// Suspicion score for `player` in the current game.
    pub fn suspicion(&self, player: PlayerId) -> Option<f64> {
        self.game.as_ref()?.belief.score(player)
    }

    /// Players confirmed as infiltrators in the current game.
    pub fn known_infiltrators(&self) -> Option<&BTreeSet<PlayerId>> {
        self.game.as_ref().map(|game| game.belief.confirmed())
    }

    /// A serializable copy of the current belief state.
    pub fn snapshot(&self) -> Option<BeliefSnapshot> {
        self.game.as_ref().map(GameState::snapshot)
    }

    fn current_mut(&mut self) -> Result<&mut GameState, AgentError> {
        self.game.as_mut().ok_or(AgentError::NoGameInProgress)
    }
}

impl HeuristicAgent<SmallRng> {
    /// Create an agent with default configuration and a seeded generator.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            config: AgentConfig::default(),
            rng: SmallRng::seed_from_u64(seed),
            game: None,
        }
    }

    /// Create an agent with default configuration seeded from the OS.
    pub fn with_os_rng(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: AgentConfig::default(),
            rng: SmallRng::from_os_rng(),
            game: None,
        }
    }
}

impl Default for HeuristicAgent<SmallRng> {
    fn default() -> Self {
        Self::with_os_rng(DEFAULT_AGENT_NAME)
    }
}

impl<R: Rng> Participant for HeuristicAgent<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(
        &mut self,
        player_count: usize,
        own_id: PlayerId,
        infiltrators: &[PlayerId],
    ) -> Result<(), AgentError> {
        let seating = Seating::new(player_count, own_id)?;
        let role = RoleKnowledge::assign(seating, infiltrators)?;
        let game = GameState::new(seating, role);
        info!(
            agent = self.name,
            game = %game.game_id,
            player_count,
            own_id = %own_id,
            "new game"
        );
        self.game = Some(game);
        Ok(())
    }

    fn is_spy(&self) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.role.side().is_infiltrator())
    }

    fn propose_mission(
        &mut self,
        team_size: usize,
        betrayals_required: u32,
    ) -> Result<Vec<PlayerId>, AgentError> {
        let Self { rng, game, .. } = self;
        let game = game.as_ref().ok_or(AgentError::NoGameInProgress)?;
        let player_count = game.seating.player_count();
        if team_size == 0 || team_size > player_count {
            return Err(AgentError::InvalidTeamSize {
                team_size,
                player_count,
            });
        }

        let team = match &game.role {
            RoleKnowledge::Infiltrator { allies } => {
                policy::infiltrator_team(game.seating, allies, team_size, betrayals_required, rng)
            }
            RoleKnowledge::Loyalist => {
                policy::loyalist_team(game.seating, &game.belief, &game.history, team_size)
            }
        };
        debug!(game = %game.game_id, ?team, betrayals_required, "proposed team");
        Ok(team)
    }

    fn vote(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        betrayals_required: u32,
    ) -> Result<bool, AgentError> {
        let Self {
            rng, game, config, ..
        } = self;
        let game = game.as_ref().ok_or(AgentError::NoGameInProgress)?;
        game.seating.check_team(team, proposer)?;

        let approve = match &game.role {
            RoleKnowledge::Infiltrator { allies } => {
                policy::infiltrator_vote(allies, team, config, rng)
            }
            RoleKnowledge::Loyalist => policy::loyalist_vote(
                &game.belief,
                team,
                proposer,
                game.history.failed_missions(),
                config,
            )?,
        };
        debug!(
            game = %game.game_id,
            ?team,
            proposer = %proposer,
            betrayals_required,
            approve,
            "voted"
        );
        Ok(approve)
    }

    fn vote_outcome(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        votes: &[bool],
    ) -> Result<(), AgentError> {
        let bump = self.config.approval_bump;
        let game = self.current_mut()?;
        game.seating.check_team(team, proposer)?;
        let expected = game.seating.player_count();
        if votes.len() != expected {
            return Err(AgentError::VoteCountMismatch {
                expected,
                actual: votes.len(),
            });
        }

        let record = VoteRecord {
            team: team.to_vec(),
            proposer,
            votes: votes.to_vec(),
        };
        game.belief.observe_vote(&record, bump);
        game.history.record_vote(record);
        Ok(())
    }

    fn betray(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        betrayals_required: u32,
    ) -> Result<bool, AgentError> {
        let Self {
            rng, game, config, ..
        } = self;
        let game = game.as_ref().ok_or(AgentError::NoGameInProgress)?;
        game.seating.check_team(team, proposer)?;

        let RoleKnowledge::Infiltrator { allies } = &game.role else {
            return Ok(false);
        };
        let decision =
            policy::decide_betrayal(allies, team, betrayals_required, &game.history, config, rng);
        debug!(game = %game.game_id, ?team, ?decision, "betrayal decision");
        Ok(decision.betrays())
    }

    fn mission_outcome(
        &mut self,
        team: &[PlayerId],
        proposer: PlayerId,
        betrayals: u32,
        success: bool,
    ) -> Result<(), AgentError> {
        let Self { game, config, .. } = self;
        let game = game.as_mut().ok_or(AgentError::NoGameInProgress)?;
        game.seating.check_team(team, proposer)?;

        game.history.record_mission(MissionRecord {
            team: team.to_vec(),
            proposer,
            betrayals,
            success,
        });
        if game.role.side().is_infiltrator() {
            return Ok(());
        }

        if success {
            game.belief.observe_success(team, config.success_relief);
        } else {
            let confirmed =
                game.belief
                    .observe_failure(team, betrayals, config.confirm_threshold)?;
            for player in confirmed {
                info!(
                    game = %game.game_id,
                    player = %player,
                    score = ?game.belief.score(player),
                    "confirmed infiltrator"
                );
            }
        }
        Ok(())
    }

    fn round_outcome(
        &mut self,
        rounds_complete: u32,
        missions_failed: u32,
    ) -> Result<(), AgentError> {
        self.current_mut()?
            .history
            .record_round(rounds_complete, missions_failed)
    }

    fn game_outcome(
        &mut self,
        spies_win: bool,
        infiltrators: &[PlayerId],
    ) -> Result<(), AgentError> {
        let Self { game, config, .. } = self;
        let game = game.as_mut().ok_or(AgentError::NoGameInProgress)?;
        for player in infiltrators {
            game.seating.check(*player)?;
        }

        let winner = Side::winner(spies_win);
        let GameState {
            role,
            belief,
            history,
            ..
        } = game;
        match role {
            RoleKnowledge::Infiltrator { allies } => belief.revise_as_infiltrator(
                history.missions(),
                winner,
                allies,
                config.endgame_bluff_adjustment,
            ),
            RoleKnowledge::Loyalist => {
                let revealed: BTreeSet<PlayerId> = infiltrators.iter().copied().collect();
                belief.revise_as_loyalist(
                    history.missions(),
                    winner,
                    &revealed,
                    config.endgame_blame,
                    config.endgame_exoneration,
                );
            }
        }
        game.winner = Some(winner);
        info!(
            game = %game.game_id,
            winner = %winner,
            side = %game.role.side(),
            missions = game.history.missions().len(),
            "game over"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::FixedRng;

    const EPS: f64 = 1e-9;

    fn ids(seats: &[usize]) -> Vec<PlayerId> {
        seats.iter().copied().map(PlayerId).collect()
    }

    fn loyalist(player_count: usize) -> HeuristicAgent {
        let mut agent = HeuristicAgent::with_seed("loyalist", 1);
        agent.new_game(player_count, PlayerId(0), &[]).unwrap();
        agent
    }

    fn infiltrator(rng: FixedRng) -> HeuristicAgent<FixedRng> {
        let mut agent = HeuristicAgent::new("infiltrator", AgentConfig::default(), rng).unwrap();
        agent.new_game(5, PlayerId(0), &ids(&[0, 3])).unwrap();
        agent
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn callbacks_before_new_game_fail() {
        let mut agent = HeuristicAgent::with_seed("early", 0);
        assert!(!agent.is_spy());
        assert_eq!(agent.propose_mission(2, 1), Err(AgentError::NoGameInProgress));
        assert_eq!(agent.vote(&ids(&[0]), PlayerId(0), 1), Err(AgentError::NoGameInProgress));
        assert_eq!(agent.round_outcome(1, 0), Err(AgentError::NoGameInProgress));
        assert_eq!(agent.game_outcome(true, &[]), Err(AgentError::NoGameInProgress));
        assert!(agent.snapshot().is_none());
    }

    #[test]
    fn new_game_rejects_out_of_range_seat() {
        let mut agent = HeuristicAgent::with_seed("bad seat", 0);
        let result = agent.new_game(5, PlayerId(5), &[]);
        assert!(matches!(result, Err(AgentError::UnknownPlayer { .. })));
        assert!(agent.game().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AgentConfig {
            infiltrator_approve_chance: 2.0,
            ..AgentConfig::default()
        };
        let result = HeuristicAgent::new("bad config", config, FixedRng(0));
        assert!(matches!(result, Err(AgentError::InvalidConfig { .. })));
    }

    #[test]
    fn role_is_derived_from_own_seat() {
        let mut agent = HeuristicAgent::with_seed("role", 0);
        agent.new_game(5, PlayerId(2), &ids(&[1, 2])).unwrap();
        assert!(agent.is_spy());
        agent.new_game(5, PlayerId(0), &ids(&[1, 2])).unwrap();
        assert!(!agent.is_spy());
    }

    #[test]
    fn new_game_discards_previous_game() {
        let mut agent = loyalist(5);
        agent
            .vote_outcome(&ids(&[0, 1]), PlayerId(0), &[true; 5])
            .unwrap();
        agent
            .mission_outcome(&ids(&[0, 1, 2]), PlayerId(0), 1, false)
            .unwrap();
        agent.mission_outcome(&ids(&[1]), PlayerId(1), 1, false).unwrap();
        agent.round_outcome(2, 2).unwrap();
        let first_game = agent.game().unwrap().game_id();
        assert!(!agent.known_infiltrators().unwrap().is_empty());

        agent.new_game(7, PlayerId(3), &[]).unwrap();
        let game = agent.game().unwrap();
        assert_ne!(game.game_id(), first_game);
        assert!(game.history().votes().is_empty());
        assert!(game.history().missions().is_empty());
        assert_eq!(game.history().failed_missions(), 0);
        assert!(game.belief().confirmed().is_empty());
        assert_eq!(game.belief().scores().len(), 6);
        assert!(game.belief().scores().values().all(|s| s.abs() < EPS));
        assert_eq!(agent.suspicion(PlayerId(3)), None);
        assert_eq!(game.winner(), None);
    }

    // -----------------------------------------------------------------------
    // Contract checks
    // -----------------------------------------------------------------------

    #[test]
    fn propose_rejects_unseatable_team_sizes() {
        let mut agent = loyalist(5);
        assert_eq!(
            agent.propose_mission(6, 1),
            Err(AgentError::InvalidTeamSize {
                team_size: 6,
                player_count: 5,
            })
        );
        assert!(agent.propose_mission(0, 1).is_err());
        assert_eq!(agent.propose_mission(5, 1).unwrap().len(), 5);
    }

    #[test]
    fn vote_vector_must_cover_every_seat() {
        let mut agent = loyalist(5);
        assert_eq!(
            agent.vote_outcome(&ids(&[0, 1]), PlayerId(0), &[true, true]),
            Err(AgentError::VoteCountMismatch {
                expected: 5,
                actual: 2,
            })
        );
        assert!(agent.game().unwrap().history().votes().is_empty());
    }

    #[test]
    fn unknown_team_member_is_reported() {
        let mut agent = loyalist(5);
        let result = agent.vote(&ids(&[0, 8]), PlayerId(0), 1);
        assert_eq!(
            result,
            Err(AgentError::UnknownPlayer {
                player: PlayerId(8),
                player_count: 5,
            })
        );
        assert!(agent.mission_outcome(&ids(&[0]), PlayerId(9), 0, true).is_err());
        assert!(agent.game_outcome(false, &ids(&[6])).is_err());
    }

    #[test]
    fn impossible_round_tally_is_reported() {
        let mut agent = loyalist(5);
        assert!(matches!(
            agent.round_outcome(1, 3),
            Err(AgentError::RoundTallyInvalid { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Role behaviour
    // -----------------------------------------------------------------------

    #[test]
    fn vote_outcome_bumps_supporting_teammates() {
        let mut agent = loyalist(5);
        agent
            .vote_outcome(&ids(&[0, 1, 2]), PlayerId(1), &[true, true, false, true, false])
            .unwrap();
        assert!((agent.suspicion(PlayerId(1)).unwrap() - 0.05).abs() < EPS);
        assert!(agent.suspicion(PlayerId(2)).unwrap().abs() < EPS);
        assert!(agent.suspicion(PlayerId(3)).unwrap().abs() < EPS);
        assert_eq!(agent.game().unwrap().history().votes().len(), 1);
    }

    #[test]
    fn loyalist_never_betrays() {
        let mut agent = loyalist(5);
        agent.round_outcome(2, 2).unwrap();
        assert_eq!(agent.betray(&ids(&[0, 1]), PlayerId(1), 1), Ok(false));
    }

    #[test]
    fn infiltrator_betrays_at_critical_juncture() {
        let mut agent = infiltrator(FixedRng(u64::MAX));
        agent.round_outcome(2, 2).unwrap();
        // Team of two infiltrators with no cover would otherwise hold.
        assert_eq!(agent.betray(&ids(&[0, 3]), PlayerId(3), 1), Ok(true));
    }

    #[test]
    fn infiltrator_holds_without_cover_or_luck() {
        let mut agent = infiltrator(FixedRng(u64::MAX));
        agent.round_outcome(1, 1).unwrap();
        assert_eq!(agent.betray(&ids(&[0, 3]), PlayerId(3), 1), Ok(false));
    }

    #[test]
    fn infiltrator_votes_for_allied_team() {
        let mut agent = infiltrator(FixedRng(u64::MAX));
        assert_eq!(agent.vote(&ids(&[1, 3]), PlayerId(1), 1), Ok(true));
        assert_eq!(agent.vote(&ids(&[1, 2]), PlayerId(1), 1), Ok(false));
    }

    #[test]
    fn infiltrator_skips_mission_bookkeeping() {
        let mut agent = infiltrator(FixedRng(0));
        agent
            .mission_outcome(&ids(&[0, 1, 2]), PlayerId(1), 1, false)
            .unwrap();
        assert_eq!(agent.game().unwrap().history().missions().len(), 1);
        assert!(agent.suspicion(PlayerId(1)).unwrap().abs() < EPS);
        assert!(agent.known_infiltrators().unwrap().is_empty());
    }

    #[test]
    fn infiltrator_game_outcome_revises_allies() {
        let mut agent = infiltrator(FixedRng(0));
        agent
            .mission_outcome(&ids(&[1, 3]), PlayerId(1), 0, true)
            .unwrap();
        agent.game_outcome(false, &ids(&[0, 3])).unwrap();
        assert!((agent.suspicion(PlayerId(3)).unwrap() - 0.3).abs() < EPS);
        assert!(agent.suspicion(PlayerId(1)).unwrap().abs() < EPS);
        assert_eq!(agent.game().unwrap().winner(), Some(Side::Loyalist));
    }

    // -----------------------------------------------------------------------
    // Snapshot and reproducibility
    // -----------------------------------------------------------------------

    #[test]
    fn snapshot_reflects_belief_state() {
        let mut agent = loyalist(5);
        agent
            .mission_outcome(&ids(&[0, 1, 2]), PlayerId(0), 1, false)
            .unwrap();
        agent.round_outcome(1, 1).unwrap();

        let snapshot = agent.snapshot().unwrap();
        assert_eq!(snapshot.own_id, PlayerId(0));
        assert_eq!(snapshot.side, Side::Loyalist);
        assert_eq!(snapshot.suspicion.len(), 4);
        let first = snapshot.suspicion.first().unwrap();
        assert_eq!(first.player, PlayerId(1));
        assert!((first.score - 0.5).abs() < EPS);
        assert_eq!(snapshot.failed_missions, 1);
        assert_eq!(snapshot.successful_missions, 0);
        assert_eq!(snapshot.missions_recorded, 1);
        assert_eq!(snapshot.votes_recorded, 0);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["side"], "loyalist");
    }

    #[test]
    fn seeded_infiltrators_replay_identically() {
        let play = |seed: u64| {
            let mut agent = HeuristicAgent::with_seed("replay", seed);
            agent.new_game(10, PlayerId(4), &ids(&[2, 4, 7])).unwrap();
            (0..10)
                .map(|_| agent.propose_mission(4, 2).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(play(42), play(42));
    }

    #[test]
    fn default_agent_uses_default_name() {
        let agent: HeuristicAgent = HeuristicAgent::default();
        assert_eq!(agent.name(), DEFAULT_AGENT_NAME);
        assert_eq!(agent.config(), &AgentConfig::default());
    }
}
