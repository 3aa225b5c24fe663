//! Candidate schedule model.
//!
//! A candidate is one point in the search space: a task→VM assignment
//! vector plus the annotations NSGA-II attaches to it (objectives, Pareto
//! rank, crowding distance).
//!
//! # Encoding
//!
//! `schedule[i] = j` places task `i` on VM `j`. The vector always has one
//! gene per task and every gene is a valid VM index.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Number of optimized objectives.
pub const NUM_OBJECTIVES: usize = 3;

/// Objective values of an evaluated schedule. All are minimized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    /// Workload of the busiest VM.
    pub makespan: f64,
    /// Sum over tasks of `vm.cost * task.length`.
    pub total_cost: f64,
    /// Population standard deviation of per-VM load ratios.
    pub load_balance: f64,
}

impl Objectives {
    /// Creates an objective record.
    pub fn new(makespan: f64, total_cost: f64, load_balance: f64) -> Self {
        Self {
            makespan,
            total_cost,
            load_balance,
        }
    }

    /// Objective values in fixed order (makespan, cost, load balance).
    pub fn as_array(&self) -> [f64; NUM_OBJECTIVES] {
        [self.makespan, self.total_cost, self.load_balance]
    }

    /// Value of the `m`-th objective in [`Objectives::as_array`] order.
    ///
    /// # Panics
    /// Panics if `m >= NUM_OBJECTIVES`.
    pub fn get(&self, m: usize) -> f64 {
        self.as_array()[m]
    }

    /// Pareto dominance under minimization.
    ///
    /// `self` dominates `other` iff it is no worse in every objective and
    /// strictly better in at least one. Equal records do not dominate each
    /// other, so the relation is irreflexive.
    pub fn dominates(&self, other: &Objectives) -> bool {
        let mut strictly_better = false;
        for (a, b) in self.as_array().iter().zip(other.as_array().iter()) {
            match a.partial_cmp(b) {
                Some(Ordering::Less) => strictly_better = true,
                Some(Ordering::Equal) => {}
                // Worse, or incomparable (NaN).
                _ => return false,
            }
        }
        strictly_better
    }
}

/// One candidate schedule in the NSGA-II population.
///
/// Candidates are owned values: operators clone parents before changing
/// genes, so annotations never alias across generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// VM index per task.
    pub schedule: Vec<usize>,
    /// Objective values. `None` until evaluated.
    pub objectives: Option<Objectives>,
    /// Pareto front index (0 = best). `None` until sorted.
    ///
    /// Not written when serializing; output carries only the schedule and
    /// its objectives.
    #[serde(skip_serializing)]
    pub rank: Option<usize>,
    /// Crowding distance within the candidate's front.
    #[serde(skip)]
    pub crowding_distance: f64,
}

impl Candidate {
    /// Creates an unevaluated candidate from an assignment vector.
    pub fn new(schedule: Vec<usize>) -> Self {
        Self {
            schedule,
            objectives: None,
            rank: None,
            crowding_distance: 0.0,
        }
    }

    /// VM assigned to the given task, if the index is in range.
    pub fn vm_for(&self, task_index: usize) -> Option<usize> {
        self.schedule.get(task_index).copied()
    }

    /// Whether the schedule has one gene per task, each a valid VM index.
    pub fn is_valid(&self, num_tasks: usize, num_vms: usize) -> bool {
        self.schedule.len() == num_tasks && self.schedule.iter().all(|&vm| vm < num_vms)
    }

    /// Whether objectives have been computed.
    pub fn is_evaluated(&self) -> bool {
        self.objectives.is_some()
    }

    /// Drops objectives, rank and crowding distance.
    ///
    /// Called whenever the schedule may have changed.
    pub fn clear_annotations(&mut self) {
        self.objectives = None;
        self.rank = None;
        self.crowding_distance = 0.0;
    }

    /// Crowded-comparison order: lower rank first, then larger crowding
    /// distance. Unranked candidates sort last.
    pub fn crowded_cmp(&self, other: &Candidate) -> Ordering {
        let ra = self.rank.unwrap_or(usize::MAX);
        let rb = other.rank.unwrap_or(usize::MAX);
        ra.cmp(&rb).then_with(|| {
            other
                .crowding_distance
                .partial_cmp(&self.crowding_distance)
                .unwrap_or(Ordering::Equal)
        })
    }
}
