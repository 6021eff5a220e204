//! Scheduler core module
//!
//! The two policy engines and the metrics pass over their results.

pub mod fcfs;
pub mod mlfq;
pub mod statistics;

use crate::scheduler::observe::StepEvent;
use crate::scheduler::process::Process;

pub use fcfs::FcfsScheduler;
pub use mlfq::MlfqScheduler;
pub use statistics::{ProcessMetrics, SimulationReport};

/// Everything an engine hands back after its last step
///
/// `processes` is the finished batch ordered by id, with the original
/// burst/I-O sequences intact for metric derivation. `events` is the
/// step-observation trace in execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub processes: Vec<Process>,
    pub total_time: u64,
    pub idle_time: u64,
    pub events: Vec<StepEvent>,
}
