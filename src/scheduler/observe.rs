//! Step Observations - engine-to-reporter events
//!
//! The engines never print. Each scheduling step emits a structured event
//! carrying the clock, the dispatched process and per-container snapshots;
//! the console reporter renders them after the run. Idle advancement is
//! its own event so tests can observe it as a distinct transition.

use super::process::{Process, ProcessId, QueueLevel};
use super::queue::ReadyQueue;

/// One queued process that is eligible at the snapshot instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyEntry {
    pub id: ProcessId,
    /// CPU time the process will ask for at its next dispatch
    pub next_burst: u32,
}

/// One queued process still waiting out I/O at the snapshot instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoEntry {
    pub id: ProcessId,
    pub remaining_io: u64,
}

/// Contents of one ready container at a given instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSnapshot {
    /// Level the container serves; `None` for the single FCFS container
    pub level: Option<QueueLevel>,
    pub ready: Vec<ReadyEntry>,
    pub waiting: Vec<IoEntry>,
}

impl QueueSnapshot {
    /// Capture a container, splitting eligible and in-I/O processes
    pub fn capture(level: Option<QueueLevel>, queue: &ReadyQueue, clock: u64) -> Self {
        let mut ready = Vec::new();
        let mut waiting = Vec::new();
        for p in queue.iter() {
            if p.arrival_time() <= clock {
                ready.push(ReadyEntry {
                    id: p.id(),
                    next_burst: p.pending_burst(),
                });
            } else {
                waiting.push(IoEntry {
                    id: p.id(),
                    remaining_io: p.arrival_time() - clock,
                });
            }
        }
        Self {
            level,
            ready,
            waiting,
        }
    }
}

/// One observable scheduling transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// A process was selected to run
    Dispatched {
        clock: u64,
        id: ProcessId,
        /// Level the process was dispatched from; `None` under FCFS
        level: Option<QueueLevel>,
        queues: Vec<QueueSnapshot>,
    },

    /// A running process was interrupted by a higher-level arrival
    Preempted {
        clock: u64,
        id: ProcessId,
        ran_for: u64,
        remaining: u32,
    },

    /// A process failed to finish its burst within the level quantum
    Demoted {
        clock: u64,
        id: ProcessId,
        from: QueueLevel,
        to: QueueLevel,
        remaining: u32,
    },

    /// A process consumed its last burst
    Finished { clock: u64, id: ProcessId },

    /// No container held an eligible process; the clock jumped forward
    Idle { from: u64, to: u64 },
}

impl StepEvent {
    /// Clock value at which the event was recorded
    pub fn clock(&self) -> u64 {
        match self {
            Self::Dispatched { clock, .. }
            | Self::Preempted { clock, .. }
            | Self::Demoted { clock, .. }
            | Self::Finished { clock, .. } => *clock,
            Self::Idle { from, .. } => *from,
        }
    }
}

/// Convenience for snapshotting (used by engines when emitting Dispatched)
pub fn snapshot_all(queues: &[(Option<QueueLevel>, &ReadyQueue)], clock: u64) -> Vec<QueueSnapshot> {
    queues
        .iter()
        .map(|(level, q)| QueueSnapshot::capture(*level, q, clock))
        .collect()
}
