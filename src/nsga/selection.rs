//! Binary tournament selection under the crowded-comparison order.

use rand::Rng;
use rand::seq::index;

use crate::models::Candidate;

/// Picks a parent by binary tournament.
///
/// Draws two distinct candidates uniformly without replacement; the one
/// with lower rank wins, and on equal rank the larger crowding distance
/// wins. The first draw wins exact ties.
///
/// # Panics
/// Panics if `population` has fewer than two candidates.
pub fn binary_tournament<'a, R: Rng>(population: &'a [Candidate], rng: &mut R) -> &'a Candidate {
    let picks = index::sample(rng, population.len(), 2);
    let a = &population[picks.index(0)];
    let b = &population[picks.index(1)];
    if b.crowded_cmp(a).is_lt() { b } else { a }
}
