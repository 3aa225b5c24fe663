//! Pareto dominance and fast non-dominated sorting.
//!
//! # Algorithm
//!
//! 1. For each candidate `p`, collect the candidates `p` dominates and
//!    count the candidates dominating `p`.
//! 2. Candidates with a zero count form front 0.
//! 3. Peel fronts: removing a front decrements the counts of everything
//!    its members dominate; counts reaching zero form the next front.
//!
//! # Complexity
//! O(N² · M) comparisons for N candidates and M objectives.
//!
//! # Reference
//! Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm:
//! NSGA-II", IEEE TEC 6(2), Sec. III-A

use crate::models::Candidate;

/// Whether candidate `a` Pareto-dominates candidate `b`.
///
/// Unevaluated candidates neither dominate nor are dominated.
pub fn dominates(a: &Candidate, b: &Candidate) -> bool {
    match (&a.objectives, &b.objectives) {
        (Some(oa), Some(ob)) => oa.dominates(ob),
        _ => false,
    }
}

/// Sorts a population into Pareto fronts and assigns ranks.
///
/// Returns the non-empty fronts in rank order, each as indices into
/// `population`. Every index appears in exactly one front, and
/// `population[i].rank` is set to the index of its front. Ties within a
/// front are left for crowding distance to resolve.
pub fn fast_non_dominated_sort(population: &mut [Candidate]) -> Vec<Vec<usize>> {
    let n = population.len();
    debug_assert!(population.iter().all(Candidate::is_evaluated));

    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];
    let mut current: Vec<usize> = Vec::new();

    for p in 0..n {
        for q in 0..n {
            if p == q {
                continue;
            }
            if dominates(&population[p], &population[q]) {
                dominated_by[p].push(q);
            } else if dominates(&population[q], &population[p]) {
                domination_count[p] += 1;
            }
        }
        if domination_count[p] == 0 {
            current.push(p);
        }
    }

    let mut fronts = Vec::new();
    let mut rank = 0;
    while !current.is_empty() {
        let mut next = Vec::new();
        for &p in &current {
            population[p].rank = Some(rank);
            for &q in &dominated_by[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    next.push(q);
                }
            }
        }
        fronts.push(current);
        current = next;
        rank += 1;
    }

    fronts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Objectives;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn cand(m: f64, c: f64, l: f64) -> Candidate {
        let mut cand = Candidate::new(vec![0]);
        cand.objectives = Some(Objectives::new(m, c, l));
        cand
    }

    fn random_population(n: usize, seed: u64) -> Vec<Candidate> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                // Coarse grid so ties and duplicates occur.
                cand(
                    rng.random_range(0..5) as f64,
                    rng.random_range(0..5) as f64,
                    rng.random_range(0..5) as f64,
                )
            })
            .collect()
    }

    #[test]
    fn test_simple_chain() {
        let mut pop = vec![cand(3.0, 3.0, 3.0), cand(1.0, 1.0, 1.0), cand(2.0, 2.0, 2.0)];
        let fronts = fast_non_dominated_sort(&mut pop);
        assert_eq!(fronts, vec![vec![1], vec![2], vec![0]]);
        assert_eq!(pop[1].rank, Some(0));
        assert_eq!(pop[2].rank, Some(1));
        assert_eq!(pop[0].rank, Some(2));
    }

    #[test]
    fn test_trade_offs_share_front() {
        let mut pop = vec![
            cand(1.0, 3.0, 0.0),
            cand(3.0, 1.0, 0.0),
            cand(2.0, 2.0, 0.0),
            cand(3.0, 3.0, 1.0),
        ];
        let fronts = fast_non_dominated_sort(&mut pop);
        assert_eq!(fronts.len(), 2);
        assert_eq!(fronts[0], vec![0, 1, 2]);
        assert_eq!(fronts[1], vec![3]);
    }

    #[test]
    fn test_identical_candidates_share_rank() {
        let mut pop = vec![cand(1.0, 1.0, 1.0), cand(1.0, 1.0, 1.0)];
        let fronts = fast_non_dominated_sort(&mut pop);
        assert_eq!(fronts, vec![vec![0, 1]]);
    }

    #[test]
    fn test_empty_population() {
        let mut pop: Vec<Candidate> = Vec::new();
        assert!(fast_non_dominated_sort(&mut pop).is_empty());
    }

    #[test]
    fn test_dominance_properties() {
        let pop = random_population(40, 3);
        for a in &pop {
            assert!(!dominates(a, a), "dominance must be irreflexive");
            for b in &pop {
                if dominates(a, b) {
                    assert!(!dominates(b, a), "dominance must be asymmetric");
                }
            }
        }
    }

    #[test]
    fn test_sort_partitions_population() {
        for seed in 0..5 {
            let mut pop = random_population(60, seed);
            let fronts = fast_non_dominated_sort(&mut pop);

            let mut seen = vec![0usize; pop.len()];
            for front in &fronts {
                assert!(!front.is_empty());
                for &i in front {
                    seen[i] += 1;
                }
            }
            assert!(seen.iter().all(|&count| count == 1));

            for (r, front) in fronts.iter().enumerate() {
                for &i in front {
                    assert_eq!(pop[i].rank, Some(r));
                    // No member of a front dominates another member.
                    for &j in front {
                        assert!(!dominates(&pop[i], &pop[j]));
                    }
                    // Every member of a later front is dominated by the previous one.
                    if r > 0 {
                        assert!(fronts[r - 1].iter().any(|&p| dominates(&pop[p], &pop[i])));
                    }
                }
            }
        }
    }
}
