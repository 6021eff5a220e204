//! Process module

pub mod process;
pub mod state;

pub use process::{BurstOutcome, Process, ProcessId, QueueLevel};
pub use state::ProcessState;
