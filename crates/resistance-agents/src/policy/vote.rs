//! Team voting.

use std::collections::BTreeSet;

use rand::Rng;
use resistance_types::PlayerId;

use crate::belief::BeliefState;
use crate::config::AgentConfig;
use crate::error::AgentError;

/// Vote as an infiltrator.
///
/// Always approves a team with an infiltrator on it (self included);
/// otherwise approves with `infiltrator_approve_chance`.
pub fn infiltrator_vote(
    allies: &BTreeSet<PlayerId>,
    team: &[PlayerId],
    config: &AgentConfig,
    rng: &mut impl Rng,
) -> bool {
    if team.iter().any(|player| allies.contains(player)) {
        return true;
    }
    rng.random_bool(config.infiltrator_approve_chance)
}

/// Vote as a loyalist.
///
/// Rejects anything proposed by or seating a confirmed infiltrator.
/// Otherwise approves iff the mean suspicion of the other team members is
/// strictly below the threshold for `failed_missions` failures. A team of
/// just the agent is approved.
pub fn loyalist_vote(
    belief: &BeliefState,
    team: &[PlayerId],
    proposer: PlayerId,
    failed_missions: u32,
    config: &AgentConfig,
) -> Result<bool, AgentError> {
    if belief.is_confirmed(proposer) || team.iter().any(|player| belief.is_confirmed(*player)) {
        return Ok(false);
    }
    let threshold = config.vote_threshold(failed_missions);
    Ok(belief
        .mean_suspicion(team)?
        .is_none_or(|mean| mean < threshold))
}
