//! Betrayal decisions for an infiltrator on a mission team.
//!
//! Rules are checked in priority order:
//!
//! 1. **Critical** -- the game is one mission from being decided
//!    (`critical_mission_count` successes or failures): always betray.
//! 2. **Deniable** -- the team seats at least one infiltrator and at least
//!    `betrayals_required` loyalists to share the blame: betray.
//! 3. **Noise** -- betray with `noise_betray_chance`.
//! 4. Otherwise hold.

use std::collections::BTreeSet;

use rand::Rng;
use resistance_types::PlayerId;

use crate::config::AgentConfig;
use crate::history::GameHistory;

/// The rule that settled a betrayal decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetrayalDecision {
    /// One mission from the end of the game.
    Critical,
    /// Enough loyalists on the team to spread suspicion.
    Deniable,
    /// Random betrayal to keep the pattern illegible.
    Noise,
    /// Play the mission straight.
    Hold,
}

impl BetrayalDecision {
    /// Returns `true` unless the decision is [`BetrayalDecision::Hold`].
    pub const fn betrays(self) -> bool {
        !matches!(self, Self::Hold)
    }
}

/// Decide whether to betray the mission `team` is about to run.
pub fn decide_betrayal(
    allies: &BTreeSet<PlayerId>,
    team: &[PlayerId],
    betrayals_required: u32,
    history: &GameHistory,
    config: &AgentConfig,
    rng: &mut impl Rng,
) -> BetrayalDecision {
    if history.failed_missions() == config.critical_mission_count
        || history.successful_missions() == config.critical_mission_count
    {
        return BetrayalDecision::Critical;
    }

    let infiltrators_on_team = team
        .iter()
        .filter(|player| allies.contains(*player))
        .collect::<BTreeSet<_>>()
        .len();
    let loyalists_on_team = team.iter().filter(|player| !allies.contains(*player)).count();
    let required = usize::try_from(betrayals_required).unwrap_or(usize::MAX);
    if infiltrators_on_team >= 1 && loyalists_on_team >= required {
        return BetrayalDecision::Deniable;
    }

    if rng.random_bool(config.noise_betray_chance) {
        BetrayalDecision::Noise
    } else {
        BetrayalDecision::Hold
    }
}
