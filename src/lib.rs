//! schedsim - CPU scheduling simulator
//!
//! Discrete-event simulation of FCFS and three-level MLFQ scheduling over
//! a batch of processes known up front, computing per-process waiting,
//! turnaround and response times plus CPU utilization.
//!
//! The engine is pure computation: the loader validates the batch before
//! an engine is constructed, the engines emit a step-observation trace
//! instead of printing, and the reporter renders traces and result tables
//! from that output.

pub mod loader;
pub mod report;
pub mod scheduler;

// Re-exports
pub use loader::{load_batch, parse_batch, LoadError};
pub use scheduler::{
    FcfsScheduler, MlfqScheduler, Process, ProcessId, ProcessMetrics, ProcessState, QueueLevel,
    SimulationOutcome, SimulationReport, StepEvent,
};
