//! Agent spawner for filling the seats of a table.
//!
//! Each seat gets its own [`HeuristicAgent`] with its own generator. With a
//! configured base seed, seat seeds are derived deterministically so a whole
//! table replays identically; without one, every agent is seeded from the
//! OS. No random state is shared between seats.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use resistance_agents::HeuristicAgent;
use tracing::info;

use crate::config::ResistanceConfig;
use crate::error::CoreError;

/// Odd 64-bit constant (the golden ratio) used to spread seat seeds.
const SEAT_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derive the seed for `seat` from a table's base seed.
pub const fn seat_seed(base: u64, seat: u64) -> u64 {
    base ^ seat.wrapping_add(1).wrapping_mul(SEAT_SEED_STRIDE)
}

/// Build one agent per name, in seat order.
///
/// # Errors
///
/// Returns [`CoreError::Agent`] if the configured agent section fails
/// validation.
pub fn spawn_agents<S: AsRef<str>>(
    config: &ResistanceConfig,
    names: &[S],
) -> Result<Vec<HeuristicAgent>, CoreError> {
    let mut agents = Vec::with_capacity(names.len());
    for (seat, name) in (0_u64..).zip(names) {
        let rng = match config.random.seed {
            Some(base) => SmallRng::seed_from_u64(seat_seed(base, seat)),
            None => SmallRng::from_os_rng(),
        };
        agents.push(HeuristicAgent::new(
            name.as_ref(),
            config.agent.clone(),
            rng,
        )?);
    }

    info!(
        seats = agents.len(),
        seeded = config.random.seed.is_some(),
        "agents spawned"
    );
    Ok(agents)
}
