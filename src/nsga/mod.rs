//! NSGA-II multi-objective optimization of task→VM assignments.
//!
//! Optimizes makespan, total cost and load balance simultaneously and
//! returns a set of Pareto-optimal schedules rather than a single answer.
//!
//! # Submodules
//!
//! - [`evaluate`]: objective computation
//! - [`dominance`]: Pareto dominance and fast non-dominated sort
//! - [`crowding`]: crowding-distance diversity metric
//! - [`selection`]: binary tournament
//! - [`operators`]: random initialization, crossover, mutation
//!
//! # Reference
//! Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm:
//! NSGA-II", IEEE Transactions on Evolutionary Computation 6(2), 182–197

mod config;
pub mod crowding;
pub mod dominance;
pub mod evaluate;
pub mod operators;
mod optimizer;
mod pareto;
pub mod selection;

pub use config::Nsga2Config;
pub use dominance::{dominates, fast_non_dominated_sort};
pub use evaluate::{evaluate, evaluate_all, evaluate_candidate};
pub use optimizer::{Nsga2Optimizer, optimize, select_survivors};
pub use pareto::extract_front;
