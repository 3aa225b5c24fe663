//! Objective evaluation.
//!
//! Maps a task→VM assignment to its three minimization objectives.
//!
//! | Objective | Definition |
//! |-----------|-----------|
//! | Makespan | max over VMs of Σ assigned task lengths |
//! | Total cost | Σ over tasks of `vm.cost * task.length` |
//! | Load balance | population std-dev of per-VM `requested / capacity` ratios |
//!
//! Evaluation reads only the shared task/VM slices, so a batch can be
//! evaluated in parallel with the `parallel` feature.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::models::{Candidate, Objectives, Task, Vm};

/// Computes the objectives of a schedule.
///
/// Pure and deterministic. Genes must be valid VM indices and the schedule
/// must have one gene per task.
///
/// # Example
///
/// ```
/// use cloud_nsga::models::{Task, Vm};
/// use cloud_nsga::nsga::evaluate;
///
/// let tasks = vec![
///     Task::new(0, 100),
///     Task::new(1, 200).with_requirements(2, 2, 2),
/// ];
/// let vms = vec![
///     Vm::new(0, 4, 4, 100, 0.005),
///     Vm::new(1, 8, 8, 200, 0.007),
/// ];
/// let obj = evaluate(&[0, 1], &tasks, &vms);
/// assert_eq!(obj.makespan, 200.0);
/// assert!((obj.total_cost - 1.9).abs() < 1e-9);
/// assert!(obj.load_balance.abs() < 1e-12);
/// ```
pub fn evaluate(schedule: &[usize], tasks: &[Task], vms: &[Vm]) -> Objectives {
    debug_assert_eq!(schedule.len(), tasks.len());

    // Summed in f64 so large u64 inputs cannot overflow.
    let mut vm_length = vec![0.0_f64; vms.len()];
    let mut vm_requested = vec![0.0_f64; vms.len()];
    let mut total_cost = 0.0;

    for (task, &vm_idx) in tasks.iter().zip(schedule) {
        let vm = &vms[vm_idx];
        let length = task.length as f64;
        vm_length[vm_idx] += length;
        vm_requested[vm_idx] += task.requested_units();
        total_cost += vm.cost * length;
    }

    let makespan = vm_length.iter().copied().fold(0.0, f64::max);

    let ratios: Vec<f64> = vms
        .iter()
        .zip(&vm_requested)
        .map(|(vm, &requested)| {
            let capacity = vm.capacity_units();
            if capacity == 0.0 {
                0.0
            } else {
                requested / capacity
            }
        })
        .collect();

    Objectives {
        makespan,
        total_cost,
        load_balance: population_std_dev(&ratios),
    }
}

/// Evaluates a candidate in place, writing its objectives.
pub fn evaluate_candidate(candidate: &mut Candidate, tasks: &[Task], vms: &[Vm]) {
    candidate.objectives = Some(evaluate(&candidate.schedule, tasks, vms));
}

/// Evaluates every candidate that has no objectives yet.
///
/// Each candidate is touched by exactly one worker; no randomness is used.
pub fn evaluate_all(candidates: &mut [Candidate], tasks: &[Task], vms: &[Vm]) {
    #[cfg(feature = "parallel")]
    let iter = candidates.par_iter_mut();
    #[cfg(not(feature = "parallel"))]
    let iter = candidates.iter_mut();

    iter.filter(|c| !c.is_evaluated())
        .for_each(|c| evaluate_candidate(c, tasks, vms));
}

fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(0, 100).with_files(50, 20),
            Task::new(1, 200).with_files(60, 30).with_requirements(2, 2, 2),
        ]
    }

    fn sample_vms() -> Vec<Vm> {
        vec![
            Vm::new(0, 4, 4, 100, 0.005),
            Vm::new(1, 8, 8, 200, 0.007).with_storage(2048),
        ]
    }

    #[test]
    fn test_worked_example() {
        let obj = evaluate(&[0, 1], &sample_tasks(), &sample_vms());
        assert_eq!(obj.makespan, 200.0);
        assert!((obj.total_cost - 1.9).abs() < 1e-9);
        assert!(obj.load_balance.abs() < 1e-12);
    }

    #[test]
    fn test_all_on_one_vm() {
        let obj = evaluate(&[1, 1], &sample_tasks(), &sample_vms());
        assert_eq!(obj.makespan, 300.0);
        assert!((obj.total_cost - 0.007 * 300.0).abs() < 1e-9);
        // ratios: 0/108 and 9/216 -> std = 9/216 / 2
        let expected = (9.0 / 216.0) / 2.0;
        assert!((obj.load_balance - expected).abs() < 1e-12);
    }

    #[test]
    fn test_idle_vm_contributes_zero_load() {
        let tasks = vec![Task::new(0, 50)];
        let vms = vec![
            Vm::new(0, 1, 1, 1, 1.0),
            Vm::new(1, 1, 1, 1, 1.0),
            Vm::new(2, 1, 1, 1, 1.0),
        ];
        let obj = evaluate(&[2], &tasks, &vms);
        assert_eq!(obj.makespan, 50.0);
        assert_eq!(obj.total_cost, 50.0);
        assert!(obj.load_balance > 0.0);
    }

    #[test]
    fn test_zero_capacity_ratio_is_zero() {
        let tasks = vec![Task::new(0, 10)];
        let vms = vec![Vm::new(0, 0, 0, 0, 0.0)];
        let obj = evaluate(&[0], &tasks, &vms);
        assert_eq!(obj.load_balance, 0.0);
        assert!(obj.load_balance.is_finite());
    }

    #[test]
    fn test_evaluation_is_pure() {
        let tasks = sample_tasks();
        let vms = sample_vms();
        let a = evaluate(&[1, 0], &tasks, &vms);
        let b = evaluate(&[1, 0], &tasks, &vms);
        assert_eq!(a.makespan.to_bits(), b.makespan.to_bits());
        assert_eq!(a.total_cost.to_bits(), b.total_cost.to_bits());
        assert_eq!(a.load_balance.to_bits(), b.load_balance.to_bits());
    }

    #[test]
    fn test_evaluate_all_skips_evaluated() {
        let tasks = sample_tasks();
        let vms = sample_vms();
        let sentinel = Objectives::new(-1.0, -1.0, -1.0);
        let mut pop = vec![Candidate::new(vec![0, 1]), Candidate::new(vec![1, 1])];
        pop[0].objectives = Some(sentinel);

        evaluate_all(&mut pop, &tasks, &vms);
        assert_eq!(pop[0].objectives, Some(sentinel));
        assert_eq!(pop[1].objectives.map(|o| o.makespan), Some(300.0));
    }

    #[test]
    fn test_huge_lengths_do_not_overflow() {
        let half = u64::MAX / 2 + 1;
        let tasks = vec![Task::new(0, half), Task::new(1, half)];
        let vms = vec![Vm::new(0, 4, 4, 100, 0.0), Vm::new(1, 4, 4, 100, 0.0)];
        assert!(crate::validation::validate_input(&tasks, &vms).is_ok());

        let obj = evaluate(&[0, 0], &tasks, &vms);
        assert!(obj.makespan.is_finite());
        assert!(obj.makespan >= 2.0 * half as f64 * 0.999);
        assert!(obj.load_balance.is_finite());
    }

    #[test]
    fn test_huge_requirements_do_not_overflow() {
        let tasks = vec![Task::new(0, 10).with_requirements(u64::MAX, 1, 1)];
        let vms = vec![Vm::new(0, 4, 4, 100, 0.005)];
        let obj = evaluate(&[0], &tasks, &vms);
        assert!(obj.load_balance.is_finite());
        assert_eq!(obj.makespan, 10.0);
    }

    #[test]
    fn test_optimize_with_huge_lengths() {
        let half = u64::MAX / 2 + 1;
        let tasks = vec![Task::new(0, half), Task::new(1, half)];
        let vms = vec![Vm::new(0, 4, 4, 100, 0.005), Vm::new(1, 8, 8, 200, 0.007)];
        let config = crate::nsga::Nsga2Config::default()
            .with_pop_size(4)
            .with_generations(1);

        let population = crate::nsga::optimize(&tasks, &vms, &config).unwrap();
        assert_eq!(population.len(), 4);
        assert!(population
            .iter()
            .all(|c| c.objectives.is_some_and(|o| o.makespan.is_finite())));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let tasks: Vec<Task> = (0..12)
            .map(|i| Task::new(i, 100 + 37 * i as u64).with_requirements(1 + i as u64 % 4, 2, 3))
            .collect();
        let vms = vec![
            Vm::new(0, 4, 4, 100, 0.001),
            Vm::new(1, 8, 16, 300, 0.006),
            Vm::new(2, 16, 8, 500, 0.01),
        ];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut pop: Vec<Candidate> = (0..64)
            .map(|_| crate::nsga::operators::random_candidate(tasks.len(), vms.len(), &mut rng))
            .collect();

        evaluate_all(&mut pop, &tasks, &vms);
        for c in &pop {
            let batch = c.objectives.unwrap();
            let single = evaluate(&c.schedule, &tasks, &vms);
            assert_eq!(batch.makespan.to_bits(), single.makespan.to_bits());
            assert_eq!(batch.total_cost.to_bits(), single.total_cost.to_bits());
            assert_eq!(batch.load_balance.to_bits(), single.load_balance.to_bits());
        }
    }

    #[test]
    fn test_population_std_dev() {
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[3.0, 3.0]), 0.0);
        assert!((population_std_dev(&[1.0, 3.0]) - 1.0).abs() < 1e-12);
    }
}
