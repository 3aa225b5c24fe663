//! Task model.
//!
//! A task is a unit of cloud work to be placed on exactly one virtual
//! machine. Its `length` drives completion time and cost, its resource
//! requirements drive the load-balance objective.

use serde::{Deserialize, Serialize};

/// A cloud task to be scheduled.
///
/// Immutable once created. All quantities are positive integers; see
/// [`crate::validation::validate_input`] for the enforced bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: u32,
    /// Workload in abstract work units.
    pub length: u64,
    /// Input file size.
    pub filesize: u64,
    /// Output file size.
    pub outputsize: u64,
    /// Requested CPU units.
    pub cpu_req: u64,
    /// Requested RAM units.
    pub ram_req: u64,
    /// Requested bandwidth units.
    pub bw_req: u64,
}

impl Task {
    /// Creates a task with the given workload and unit requirements.
    ///
    /// File sizes default to 1; set them with [`Task::with_files`].
    pub fn new(id: u32, length: u64) -> Self {
        Self {
            id,
            length,
            filesize: 1,
            outputsize: 1,
            cpu_req: 1,
            ram_req: 1,
            bw_req: 1,
        }
    }

    /// Sets input and output file sizes.
    pub fn with_files(mut self, filesize: u64, outputsize: u64) -> Self {
        self.filesize = filesize;
        self.outputsize = outputsize;
        self
    }

    /// Sets CPU, RAM and bandwidth requirements.
    pub fn with_requirements(mut self, cpu: u64, ram: u64, bw: u64) -> Self {
        self.cpu_req = cpu;
        self.ram_req = ram;
        self.bw_req = bw;
        self
    }

    /// Sum of CPU, RAM and bandwidth requirements.
    ///
    /// Summed in floating point, so huge requirements cannot overflow.
    pub fn requested_units(&self) -> f64 {
        self.cpu_req as f64 + self.ram_req as f64 + self.bw_req as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new(3, 500)
            .with_files(120, 40)
            .with_requirements(2, 3, 4);

        assert_eq!(task.id, 3);
        assert_eq!(task.length, 500);
        assert_eq!(task.filesize, 120);
        assert_eq!(task.outputsize, 40);
        assert_eq!(task.cpu_req, 2);
        assert_eq!(task.ram_req, 3);
        assert_eq!(task.bw_req, 4);
    }

    #[test]
    fn test_requested_units() {
        let task = Task::new(0, 100).with_requirements(2, 2, 2);
        assert_eq!(task.requested_units(), 6.0);
    }

    #[test]
    fn test_requested_units_saturated_fields() {
        let task = Task::new(0, 1).with_requirements(u64::MAX, 1, 1);
        let units = task.requested_units();
        assert!(units.is_finite());
        assert!(units >= u64::MAX as f64);
    }

    #[test]
    fn test_task_serde() {
        let task = Task::new(1, 200).with_files(60, 30).with_requirements(2, 2, 2);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"cpu_req\":2"));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
