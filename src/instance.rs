//! Problem instances.
//!
//! A [`ProblemInstance`] bundles everything one optimizer run needs: tasks,
//! VMs and algorithm parameters. Instances are plain JSON documents:
//!
//! ```json
//! {
//!   "tasks": [{"id": 0, "length": 100, "filesize": 50, "outputsize": 20,
//!              "cpu_req": 1, "ram_req": 1, "bw_req": 1}],
//!   "vms":   [{"id": 0, "cpu_cap": 4, "ram_cap": 4, "bw_cap": 100,
//!              "storage": 1024, "cost": 0.005}],
//!   "config": {"pop_size": 50, "generations": 40}
//! }
//! ```
//!
//! `config` may be omitted or partial; missing fields take their defaults.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::models::{Task, Vm};
use crate::nsga::Nsga2Config;
use crate::validation::{ValidationResult, validate_config, validate_input};

/// Tasks, VMs and parameters for one optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Tasks to place.
    pub tasks: Vec<Task>,
    /// Machines available for placement.
    pub vms: Vec<Vm>,
    /// Algorithm parameters.
    #[serde(default)]
    pub config: Nsga2Config,
}

impl ProblemInstance {
    /// Creates an instance with default parameters.
    pub fn new(tasks: Vec<Task>, vms: Vec<Vm>) -> Self {
        Self {
            tasks,
            vms,
            config: Nsga2Config::default(),
        }
    }

    /// Sets the algorithm parameters.
    pub fn with_config(mut self, config: Nsga2Config) -> Self {
        self.config = config;
        self
    }

    /// Parses an instance from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an instance from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SchedulerError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Serializes the instance as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generates a random instance.
    ///
    /// Value ranges (inclusive):
    ///
    /// | Field | Range |
    /// |-------|-------|
    /// | task length | 100–1000 |
    /// | filesize | 50–200 |
    /// | outputsize | 20–100 |
    /// | cpu/ram/bw requirement | 1–4 |
    /// | VM cpu/ram capacity | 4–16 |
    /// | VM bandwidth | 100–500 |
    /// | VM storage | 1024–20480 |
    /// | VM cost | 0.001–0.01, 4 decimals |
    pub fn random<R: Rng>(num_tasks: usize, num_vms: usize, rng: &mut R) -> Self {
        let tasks = (0..num_tasks)
            .map(|i| Task {
                id: i as u32,
                length: rng.random_range(100..=1000),
                filesize: rng.random_range(50..=200),
                outputsize: rng.random_range(20..=100),
                cpu_req: rng.random_range(1..=4),
                ram_req: rng.random_range(1..=4),
                bw_req: rng.random_range(1..=4),
            })
            .collect();

        let vms = (0..num_vms)
            .map(|j| Vm {
                id: j as u32,
                cpu_cap: rng.random_range(4..=16),
                ram_cap: rng.random_range(4..=16),
                bw_cap: rng.random_range(100..=500),
                storage: rng.random_range(1024..=20480),
                cost: (rng.random_range(0.001..=0.01_f64) * 10_000.0).round() / 10_000.0,
            })
            .collect();

        Self::new(tasks, vms)
    }

    /// Checks tasks, VMs and parameters, reporting every problem found.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if let Err(e) = validate_input(&self.tasks, &self.vms) {
            errors.extend(e);
        }
        if let Err(e) = validate_config(&self.config) {
            errors.extend(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
