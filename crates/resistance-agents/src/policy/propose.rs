//! Team proposal.
//!
//! Both roles put themselves on the team first. An infiltrator then seats
//! just enough allies to cover the required betrayals and dilutes the rest
//! of the team with loyalists, both in shuffled order. A loyalist fills
//! seats with the least suspected players, preferring those never seen on
//! a failed mission and never seating a confirmed infiltrator unless the
//! table has run out of alternatives.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use resistance_types::PlayerId;

use crate::belief::BeliefState;
use crate::history::GameHistory;
use crate::role::Seating;

/// Propose a team as an infiltrator.
///
/// Seats at most `betrayals_required` infiltrators (self included), then
/// loyalists in random order. Allies left over pad the team if the table
/// has too few loyalists.
pub fn infiltrator_team(
    seating: Seating,
    allies: &BTreeSet<PlayerId>,
    team_size: usize,
    betrayals_required: u32,
    rng: &mut impl Rng,
) -> Vec<PlayerId> {
    let mut team = vec![seating.own_id()];
    let mut candidates: Vec<PlayerId> = seating.opponents().collect();
    candidates.shuffle(rng);

    let mut infiltrators_seated: u32 = 1;
    for player in &candidates {
        if team.len() >= team_size {
            break;
        }
        if allies.contains(player) && infiltrators_seated < betrayals_required {
            team.push(*player);
            infiltrators_seated = infiltrators_seated.saturating_add(1);
        }
    }

    let mut loyalists: Vec<PlayerId> = candidates
        .iter()
        .copied()
        .filter(|player| !allies.contains(player))
        .collect();
    loyalists.shuffle(rng);
    fill(&mut team, loyalists, team_size);

    fill(&mut team, candidates, team_size);
    team
}

/// Propose a team as a loyalist.
///
/// Candidates are taken in ascending suspicion order (ties in seat order):
/// 1. unconfirmed players with no failed-mission appearances;
/// 2. any remaining unconfirmed players;
/// 3. anyone left, so the team always reaches `team_size`.
pub fn loyalist_team(
    seating: Seating,
    belief: &BeliefState,
    history: &GameHistory,
    team_size: usize,
) -> Vec<PlayerId> {
    let mut team = vec![seating.own_id()];
    let ranked = belief.ranked();

    let clean = ranked
        .iter()
        .copied()
        .filter(|player| !belief.is_confirmed(*player) && history.failed_appearances(*player) == 0);
    fill(&mut team, clean, team_size);

    let unconfirmed = ranked
        .iter()
        .copied()
        .filter(|player| !belief.is_confirmed(*player));
    fill(&mut team, unconfirmed, team_size);

    if team.len() < team_size {
        tracing::debug!(
            team_size,
            seated = team.len(),
            "not enough unconfirmed players, seating confirmed infiltrators"
        );
    }
    fill(&mut team, ranked, team_size);
    team
}

/// Append candidates not already seated until the team is full.
fn fill(team: &mut Vec<PlayerId>, candidates: impl IntoIterator<Item = PlayerId>, team_size: usize) {
    for player in candidates {
        if team.len() >= team_size {
            break;
        }
        if !team.contains(&player) {
            team.push(player);
        }
    }
}
