//! Input validation for cloud scheduling problems.
//!
//! Checks tasks, VMs and algorithm parameters before an optimizer run.
//! Detects:
//! - Empty task or VM lists
//! - Duplicate IDs
//! - Non-positive requirement or capacity fields
//! - Negative or non-finite VM costs
//! - Out-of-range population size, generation count and probabilities
//!
//! All checks run to completion so callers see every problem at once.

use thiserror::Error;

use crate::models::{Candidate, Task, Vm};
use crate::nsga::Nsga2Config;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No tasks were supplied.
    EmptyTasks,
    /// No VMs were supplied.
    EmptyVms,
    /// Two entities share the same ID.
    DuplicateId,
    /// A requirement, capacity or size field is zero.
    NonPositiveField,
    /// A VM cost is negative, NaN or infinite.
    InvalidCost,
    /// `pop_size < 2`.
    InvalidPopulationSize,
    /// `generations < 1`.
    InvalidGenerationCount,
    /// A probability lies outside `[0, 1]`.
    InvalidProbability,
    /// A schedule does not have one gene per task.
    InvalidScheduleLength,
    /// A schedule gene is not a valid VM index.
    InvalidVmIndex,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates tasks and VMs.
///
/// Checks:
/// 1. At least one task and one VM
/// 2. No duplicate task IDs, no duplicate VM IDs
/// 3. Task length, file sizes and requirements are positive
/// 4. VM capacities and storage are positive
/// 5. VM cost is finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], vms: &[Vm]) -> ValidationResult {
    let mut errors = Vec::new();

    if tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTasks,
            "Task list is empty",
        ));
    }
    if vms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyVms,
            "VM list is empty",
        ));
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        let fields = [
            ("length", task.length),
            ("filesize", task.filesize),
            ("outputsize", task.outputsize),
            ("cpu_req", task.cpu_req),
            ("ram_req", task.ram_req),
            ("bw_req", task.bw_req),
        ];
        for (name, value) in fields {
            if value == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveField,
                    format!("Task {} has non-positive {name}", task.id),
                ));
            }
        }
    }

    let mut vm_ids = HashSet::new();
    for vm in vms {
        if !vm_ids.insert(vm.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate VM ID: {}", vm.id),
            ));
        }
        let fields = [
            ("cpu_cap", vm.cpu_cap),
            ("ram_cap", vm.ram_cap),
            ("bw_cap", vm.bw_cap),
            ("storage", vm.storage),
        ];
        for (name, value) in fields {
            if value == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveField,
                    format!("VM {} has non-positive {name}", vm.id),
                ));
            }
        }
        if !vm.cost.is_finite() || vm.cost < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCost,
                format!("VM {} has invalid cost {}", vm.id, vm.cost),
            ));
        }
    }

    finish(errors)
}

/// Validates algorithm parameters.
///
/// Probabilities are rejected, not clamped, when outside `[0, 1]` or NaN.
pub fn validate_config(config: &Nsga2Config) -> ValidationResult {
    let mut errors = Vec::new();

    if config.pop_size < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidPopulationSize,
            format!("Population size must be at least 2 (got {})", config.pop_size),
        ));
    }
    if config.generations < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidGenerationCount,
            "Generation count must be at least 1",
        ));
    }
    for (name, prob) in [
        ("crossover", config.crossover_prob),
        ("mutation", config.mutation_prob),
    ] {
        if !(0.0..=1.0).contains(&prob) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProbability,
                format!("{name} probability must be within [0, 1] (got {prob})"),
            ));
        }
    }

    finish(errors)
}

/// Validates a candidate's encoding against the problem dimensions.
pub fn validate_candidate(candidate: &Candidate, num_tasks: usize, num_vms: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if candidate.schedule.len() != num_tasks {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidScheduleLength,
            format!(
                "Schedule has {} genes, expected {num_tasks}",
                candidate.schedule.len()
            ),
        ));
    }
    for (task, &vm) in candidate.schedule.iter().enumerate() {
        if vm >= num_vms {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidVmIndex,
                format!("Task {task} assigned to unknown VM index {vm}"),
            ));
        }
    }

    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
