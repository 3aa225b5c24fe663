//! Genetic operators on task→VM assignment vectors.
//!
//! All operators take the caller's random source explicitly and never
//! modify a parent: children are fresh copies with cleared annotations.

use rand::Rng;

use crate::models::Candidate;

/// Creates a candidate with independently uniform VM choices per task.
pub fn random_candidate<R: Rng>(num_tasks: usize, num_vms: usize, rng: &mut R) -> Candidate {
    let schedule = (0..num_tasks).map(|_| rng.random_range(0..num_vms)).collect();
    Candidate::new(schedule)
}

/// Single-point crossover.
///
/// With probability `prob`, picks a cut point uniformly from
/// `[1, len - 1]` and swaps tails: child 1 = p1 prefix + p2 suffix,
/// child 2 = p2 prefix + p1 suffix. Otherwise the children copy their
/// parents. Schedules shorter than two genes have no cut point and are
/// always copied.
pub fn single_point_crossover<R: Rng>(
    p1: &Candidate,
    p2: &Candidate,
    prob: f64,
    rng: &mut R,
) -> (Candidate, Candidate) {
    debug_assert_eq!(p1.schedule.len(), p2.schedule.len());

    let len = p1.schedule.len();
    if rng.random::<f64>() < prob && len >= 2 {
        let point = rng.random_range(1..len);
        let mut s1 = Vec::with_capacity(len);
        s1.extend_from_slice(&p1.schedule[..point]);
        s1.extend_from_slice(&p2.schedule[point..]);
        let mut s2 = Vec::with_capacity(len);
        s2.extend_from_slice(&p2.schedule[..point]);
        s2.extend_from_slice(&p1.schedule[point..]);
        (Candidate::new(s1), Candidate::new(s2))
    } else {
        (
            Candidate::new(p1.schedule.clone()),
            Candidate::new(p2.schedule.clone()),
        )
    }
}

/// Uniform reassignment mutation.
///
/// Each gene is independently replaced, with probability `prob`, by a
/// uniformly drawn VM index (possibly the same one). Takes the candidate by
/// value, so a parent must be cloned by the caller to survive; annotations
/// on the result are cleared.
pub fn reassign_mutation<R: Rng>(
    candidate: Candidate,
    num_vms: usize,
    prob: f64,
    rng: &mut R,
) -> Candidate {
    let mut child = candidate;
    child.clear_annotations();
    for gene in child.schedule.iter_mut() {
        if rng.random::<f64>() < prob {
            *gene = rng.random_range(0..num_vms);
        }
    }
    child
}
