//! Player pool construction and seeded shuffling.

use super::models::{Player, TeamSetup};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flatten the roster into a player sequence
///
/// Teams come in ascending ID order and each team's players keep their
/// roster order, so the result depends only on the setup's contents.
pub fn build_pool(setup: &TeamSetup) -> Vec<Player> {
    let mut team_ids: Vec<_> = setup.teams.keys().copied().collect();
    team_ids.sort_unstable();

    team_ids
        .into_iter()
        .flat_map(|team_id| {
            setup.teams[&team_id]
                .iter()
                .map(move |&id| Player::new(id, team_id))
        })
        .collect()
}

/// Shuffle players with a generator seeded from `seed`
///
/// Durstenfeld's Fisher-Yates: walking `i` from the back, swap slot `i`
/// with a uniform index in `0..=i` drawn by `uniform_index`. ChaCha8
/// output is reproducible across platforms, so the same `(players, seed)`
/// always gives the same order.
pub fn shuffle(mut players: Vec<Player>, seed: i64) -> Vec<Player> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);

    for i in (1..players.len()).rev() {
        let j = uniform_index(&mut rng, i + 1);
        players.swap(i, j);
    }

    players
}

/// Uniform index in `0..bound` from raw 64-bit draws
///
/// Draws below `2^64 mod bound` are rejected and redrawn; the rest are
/// reduced with `%`. Pinned draws depend on this exact reduction, so it
/// does not go through `rand`'s range sampling.
fn uniform_index<R: RngCore>(rng: &mut R, bound: usize) -> usize {
    let bound = bound as u64;
    let threshold = bound.wrapping_neg() % bound;

    loop {
        let x = rng.next_u64();
        if x >= threshold {
            return (x % bound) as usize;
        }
    }
}
