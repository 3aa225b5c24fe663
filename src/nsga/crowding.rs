//! Crowding-distance assignment.
//!
//! Estimates how densely the neighbourhood of each front member is
//! populated in objective space. Larger distance = less crowded = preferred
//! among candidates of equal rank.
//!
//! # Algorithm
//!
//! For each objective: sort the front ascending, give both boundary members
//! an infinite distance, and add the normalized gap between each interior
//! member's neighbours. An objective on which the whole front is constant
//! adds nothing to interior members.
//!
//! # Reference
//! Deb et al. (2002), "NSGA-II", Sec. III-B

use std::cmp::Ordering;

use crate::models::{Candidate, NUM_OBJECTIVES};

/// Computes crowding distances for one front.
///
/// `front` holds indices into `population`; distances of other candidates
/// are untouched. Must be rerun whenever the front's membership changes.
pub fn assign_crowding_distance(population: &mut [Candidate], front: &[usize]) {
    if front.is_empty() {
        return;
    }
    for &i in front {
        population[i].crowding_distance = 0.0;
    }

    let mut order = front.to_vec();
    for m in 0..NUM_OBJECTIVES {
        order.sort_by(|&a, &b| {
            objective(&population[a], m)
                .partial_cmp(&objective(&population[b], m))
                .unwrap_or(Ordering::Equal)
        });

        let first = order[0];
        let last = order[order.len() - 1];
        population[first].crowding_distance = f64::INFINITY;
        population[last].crowding_distance = f64::INFINITY;

        let min = objective(&population[first], m);
        let max = objective(&population[last], m);
        let span = max - min;
        if span == 0.0 || !span.is_finite() {
            continue;
        }

        for k in 1..order.len().saturating_sub(1) {
            let gap = objective(&population[order[k + 1]], m) - objective(&population[order[k - 1]], m);
            population[order[k]].crowding_distance += gap / span;
        }
    }
}

/// Orders front indices by descending crowding distance.
///
/// The sort is stable, so equally crowded members keep their front order.
pub fn sort_by_crowding_desc(population: &[Candidate], front: &mut [usize]) {
    front.sort_by(|&a, &b| {
        population[b]
            .crowding_distance
            .partial_cmp(&population[a].crowding_distance)
            .unwrap_or(Ordering::Equal)
    });
}

fn objective(candidate: &Candidate, m: usize) -> f64 {
    candidate.objectives.map_or(f64::NAN, |o| o.get(m))
}
