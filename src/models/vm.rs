//! Virtual machine model.
//!
//! VMs are the resources tasks are placed on. Each has CPU, RAM and
//! bandwidth capacities (used for load ratios), storage, and a price per
//! workload unit.

use serde::{Deserialize, Serialize};

/// A virtual machine that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vm {
    /// VM identifier.
    pub id: u32,
    /// CPU capacity units.
    pub cpu_cap: u64,
    /// RAM capacity units.
    pub ram_cap: u64,
    /// Bandwidth capacity units.
    pub bw_cap: u64,
    /// Storage capacity.
    pub storage: u64,
    /// Monetary cost per workload unit (non-negative).
    pub cost: f64,
}

impl Vm {
    /// Creates a VM with the given capacities and unit cost.
    ///
    /// Storage defaults to 1024; set it with [`Vm::with_storage`].
    pub fn new(id: u32, cpu_cap: u64, ram_cap: u64, bw_cap: u64, cost: f64) -> Self {
        Self {
            id,
            cpu_cap,
            ram_cap,
            bw_cap,
            storage: 1024,
            cost,
        }
    }

    /// Sets the storage capacity.
    pub fn with_storage(mut self, storage: u64) -> Self {
        self.storage = storage;
        self
    }

    /// Sum of CPU, RAM and bandwidth capacities.
    ///
    /// Summed in floating point, so huge capacities cannot overflow.
    pub fn capacity_units(&self) -> f64 {
        self.cpu_cap as f64 + self.ram_cap as f64 + self.bw_cap as f64
    }
}
