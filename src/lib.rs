//! Multi-objective cloud task scheduling.
//!
//! Assigns a fixed set of tasks to a fixed set of virtual machines and
//! searches for Pareto-optimal trade-offs between three minimized
//! objectives: makespan, monetary cost and resource-load imbalance.
//! The search is NSGA-II; its output is a front of candidate schedules,
//! not a single decision.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Vm`, `Candidate`, `Objectives`
//! - **`nsga`**: Evaluation, non-dominated sorting, crowding distance,
//!   genetic operators and the generational loop
//! - **`validation`**: Input and parameter checks run before optimization
//! - **`instance`**: Serializable problem bundles and random instance generation
//! - **`error`**: Crate error type
//!
//! # Architecture
//!
//! The optimizer is a pure in-memory computation: single-threaded, seeded
//! from one explicit random source, no I/O. Reading instances from disk and
//! presenting the resulting front are left to callers such as the
//! `cloud-nsga` binary.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod instance;
pub mod models;
pub mod nsga;
pub mod validation;

pub use error::{Result, SchedulerError};
