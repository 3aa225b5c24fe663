//! Pareto front extraction.

use super::dominance::fast_non_dominated_sort;
use crate::models::Candidate;

/// Returns the rank-0 front of a population.
///
/// Runs a fresh non-dominated sort over a copy of `population`, so ranks on
/// the input are left as they were. The result is non-empty whenever the
/// population is, and every returned candidate carries `rank == Some(0)`.
pub fn extract_front(population: &[Candidate]) -> Vec<Candidate> {
    let mut pool = population.to_vec();
    let fronts = fast_non_dominated_sort(&mut pool);
    let Some(first) = fronts.first() else {
        return Vec::new();
    };

    let mut slots: Vec<Option<Candidate>> = pool.into_iter().map(Some).collect();
    first.iter().filter_map(|&i| slots[i].take()).collect()
}
