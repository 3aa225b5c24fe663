//! Cloud scheduling domain models.
//!
//! Provides the data types the optimizer works on: the immutable problem
//! inputs (`Task`, `Vm`) and the mutable search state (`Candidate`,
//! `Objectives`).
//!
//! # Domain Mappings
//!
//! | cloud-nsga | Cloud | Job shop |
//! |------------|-------|----------|
//! | Task | Cloudlet / job | Job |
//! | Vm | Virtual machine | Machine |
//! | Candidate | Placement plan | Machine assignment vector |

mod candidate;
mod task;
mod vm;

pub use candidate::{Candidate, NUM_OBJECTIVES, Objectives};
pub use task::Task;
pub use vm::Vm;
