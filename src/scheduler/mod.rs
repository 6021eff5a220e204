//! Scheduler subsystem
//!
//! Discrete-event simulation of CPU scheduling over a batch of processes
//! known up front. Two disciplines are implemented:
//! - FCFS: single queue, every burst runs to completion
//! - MLFQ: three-level feedback queue, round robin with quanta `tq1`/`tq2`
//!   at levels 1-2, FCFS at level 3, preemption across levels
//!
//! # Features
//! - Deterministic dispatch order (arrival time, then process id)
//! - Quantum accounting with demotion ladder and completion promotion
//! - Preemption-interval truncation against higher-level arrivals
//! - Idle-time detection as an observable transition
//! - Step-observation event trace for the reporter

pub mod core;
pub mod observe;
pub mod process;
pub mod queue;

// Re-exports
pub use self::core::{
    FcfsScheduler, MlfqScheduler, ProcessMetrics, SimulationOutcome, SimulationReport,
};
pub use observe::{IoEntry, QueueSnapshot, ReadyEntry, StepEvent};
pub use process::{BurstOutcome, Process, ProcessId, ProcessState, QueueLevel};
pub use queue::ReadyQueue;
