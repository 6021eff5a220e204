//! Process Record and Burst Accounting
//!
//! Represents one unit of schedulable work: an alternating sequence of CPU
//! bursts and I/O waits, plus the mutable bookkeeping the policy engines
//! need (cursors, remainder of an interrupted burst, timestamps).
//!
//! The original burst and I/O sequences are never mutated. Partial
//! consumption of a burst under preemption or quantum expiry is tracked in
//! `remaining_burst` only, so the metrics pass can always sum the exact
//! amounts the process demanded.

use super::state::{validate_transition, ProcessState};
use core::fmt;

/// Process ID type
pub type ProcessId = u32;

/// Queue membership levels for the multi-level feedback queue
///
/// Q1 and Q2 are round-robin levels with a time quantum, Q3 runs
/// first-come-first-served without one. New processes start at Q1;
/// failing to finish a burst within the level quantum demotes one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum QueueLevel {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
}

impl QueueLevel {
    /// Next level down the demotion ladder (Q3 is the floor)
    pub fn demoted(self) -> Self {
        match self {
            Self::Q1 => Self::Q2,
            Self::Q2 => Self::Q3,
            Self::Q3 => Self::Q3,
        }
    }

    /// Numeric priority (1 = highest)
    pub fn as_number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for QueueLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Q{}", self.as_number())
    }
}

/// What happened when the burst in progress ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstOutcome {
    /// The burst sequence is exhausted, the process is done
    Finished,

    /// More bursts remain; the process waits out `duration` of I/O before
    /// it becomes eligible again (0 when the I/O sequence is exhausted)
    IoWait { duration: u32 },
}

/// Process record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    /// Unique process ID (tie-break and reporting key)
    id: ProcessId,

    /// Original CPU demands, one entry per burst. Never mutated.
    bursts: Vec<u32>,

    /// Original I/O durations between consecutive bursts. Never mutated.
    /// Invariant: `io_times.len() == bursts.len() - 1`.
    io_times: Vec<u32>,

    /// Index of the burst in progress (== bursts.len() once finished)
    burst_cursor: usize,

    /// Index of the next unconsumed I/O duration
    io_cursor: usize,

    /// Instant at which the process next becomes eligible to run
    arrival_time: u64,

    /// Remainder of the burst in progress. 0 means the next dispatch
    /// starts a fresh burst from `bursts[burst_cursor]`.
    remaining_burst: u32,

    /// True until the first dispatch; governs response-time capture
    first_execution: bool,

    /// Captured exactly once, at the instant of first dispatch
    response_time: Option<u64>,

    /// Captured exactly once, when the last burst finishes
    completion_time: Option<u64>,

    /// Current queue membership (meaningful under MLFQ only)
    level: QueueLevel,

    /// Lifecycle state
    state: ProcessState,
}

impl Process {
    /// Create a new process eligible at time 0 on the top level
    ///
    /// The loader guarantees the input contract: `bursts` is non-empty
    /// with strictly positive entries and `io_times` has exactly one
    /// entry fewer.
    pub fn new(id: ProcessId, bursts: Vec<u32>, io_times: Vec<u32>) -> Self {
        debug_assert!(!bursts.is_empty());
        debug_assert_eq!(io_times.len(), bursts.len() - 1);

        Self {
            id,
            bursts,
            io_times,
            burst_cursor: 0,
            io_cursor: 0,
            arrival_time: 0,
            remaining_burst: 0,
            first_execution: true,
            response_time: None,
            completion_time: None,
            level: QueueLevel::Q1,
            state: ProcessState::Ready,
        }
    }

    /// Get process ID
    pub fn id(&self) -> ProcessId {
        self.id
    }

    /// Original burst sequence
    pub fn bursts(&self) -> &[u32] {
        &self.bursts
    }

    /// Original I/O sequence
    pub fn io_times(&self) -> &[u32] {
        &self.io_times
    }

    /// Sum of all original CPU demands
    pub fn total_burst(&self) -> u64 {
        self.bursts.iter().map(|&b| u64::from(b)).sum()
    }

    /// Sum of all original I/O durations
    pub fn total_io(&self) -> u64 {
        self.io_times.iter().map(|&io| u64::from(io)).sum()
    }

    /// Next-eligible instant
    pub fn arrival_time(&self) -> u64 {
        self.arrival_time
    }

    /// Override the next-eligible instant (preemption and demotion paths)
    pub fn set_arrival_time(&mut self, at: u64) {
        self.arrival_time = at;
    }

    /// Current queue membership
    pub fn level(&self) -> QueueLevel {
        self.level
    }

    /// Move the process to another level
    pub fn set_level(&mut self, level: QueueLevel) {
        self.level = level;
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Transition to a new lifecycle state
    pub fn set_state(&mut self, state: ProcessState) {
        debug_assert!(
            validate_transition(self.state, state),
            "invalid transition {} -> {} for P{}",
            self.state,
            state,
            self.id
        );
        self.state = state;
    }

    /// Has the process never been dispatched?
    pub fn first_execution(&self) -> bool {
        self.first_execution
    }

    /// Response time, if the process has been dispatched at least once
    pub fn response_time(&self) -> Option<u64> {
        self.response_time
    }

    /// Completion time, if the process has finished
    pub fn completion_time(&self) -> Option<u64> {
        self.completion_time
    }

    /// Has the burst sequence been exhausted?
    pub fn is_finished(&self) -> bool {
        self.burst_cursor >= self.bursts.len()
    }

    /// Record a dispatch, capturing the response time exactly once
    pub fn note_dispatched(&mut self, now: u64) {
        if self.first_execution {
            self.response_time = Some(now);
            self.first_execution = false;
        }
    }

    /// CPU time still owed on the burst in progress, without starting one
    pub fn pending_burst(&self) -> u32 {
        if self.remaining_burst > 0 {
            self.remaining_burst
        } else {
            self.bursts.get(self.burst_cursor).copied().unwrap_or(0)
        }
    }

    /// Begin (or resume) the burst at the cursor and return its remainder
    ///
    /// A fresh burst loads `bursts[burst_cursor]` into the remainder; a
    /// burst interrupted by preemption or quantum expiry resumes from
    /// whatever was left.
    pub fn begin_burst(&mut self) -> u32 {
        if self.remaining_burst == 0 {
            self.remaining_burst = self.bursts.get(self.burst_cursor).copied().unwrap_or(0);
        }
        self.remaining_burst
    }

    /// Consume part of the burst in progress (preemption, quantum expiry)
    pub fn consume(&mut self, amount: u32) {
        debug_assert!(
            amount <= self.remaining_burst,
            "P{} consumed {} with only {} remaining",
            self.id,
            amount,
            self.remaining_burst
        );
        self.remaining_burst -= amount;
    }

    /// Finish the burst in progress at instant `now`
    ///
    /// Advances the burst cursor, bounds-checked. Exhausting the sequence
    /// is the normal terminal transition: the completion time is stamped
    /// and the process must not re-enter any container. Otherwise one I/O
    /// duration is consumed and the arrival time recomputed; an exhausted
    /// I/O sequence re-arrives the process immediately.
    pub fn complete_burst(&mut self, now: u64) -> BurstOutcome {
        self.remaining_burst = 0;
        self.burst_cursor += 1;

        if self.burst_cursor >= self.bursts.len() {
            self.completion_time = Some(now);
            self.set_state(ProcessState::Finished);
            return BurstOutcome::Finished;
        }

        let duration = if self.io_cursor < self.io_times.len() {
            let io = self.io_times[self.io_cursor];
            self.io_cursor += 1;
            io
        } else {
            0
        };
        self.arrival_time = now + u64::from(duration);
        BurstOutcome::IoWait { duration }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(id: ProcessId, bursts: Vec<u32>, io: Vec<u32>) -> Process {
        Process::new(id, bursts, io)
    }

    #[test]
    fn test_response_captured_once() {
        let mut p = proc(1, vec![4, 4], vec![2]);
        p.note_dispatched(3);
        assert_eq!(p.response_time(), Some(3));
        assert!(!p.first_execution());

        p.note_dispatched(9);
        assert_eq!(p.response_time(), Some(3));
    }

    #[test]
    fn test_burst_resume_after_partial_consume() {
        let mut p = proc(1, vec![10], vec![]);
        assert_eq!(p.begin_burst(), 10);
        p.consume(4);
        assert_eq!(p.pending_burst(), 6);
        // a later dispatch resumes the remainder, not a fresh burst
        assert_eq!(p.begin_burst(), 6);
    }

    #[test]
    fn test_complete_burst_consumes_io_and_recomputes_arrival() {
        let mut p = proc(2, vec![3, 5], vec![7]);
        p.set_state(ProcessState::Running);
        p.begin_burst();
        p.consume(3);
        match p.complete_burst(3) {
            BurstOutcome::IoWait { duration } => assert_eq!(duration, 7),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(p.arrival_time(), 10);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_last_burst_finishes_process() {
        let mut p = proc(3, vec![2], vec![]);
        p.set_state(ProcessState::Running);
        p.begin_burst();
        p.consume(2);
        assert_eq!(p.complete_burst(2), BurstOutcome::Finished);
        assert!(p.is_finished());
        assert_eq!(p.completion_time(), Some(2));
        assert_eq!(p.state(), ProcessState::Finished);
    }

    #[test]
    fn test_zero_io_rearrives_immediately() {
        // a zero-length io entry re-arrives the process at the clock
        let mut p = proc(4, vec![1, 1, 1], vec![5, 0]);
        p.set_state(ProcessState::Running);
        p.begin_burst();
        p.consume(1);
        assert_eq!(p.complete_burst(1), BurstOutcome::IoWait { duration: 5 });
        p.begin_burst();
        p.consume(1);
        assert_eq!(p.complete_burst(7), BurstOutcome::IoWait { duration: 0 });
        assert_eq!(p.arrival_time(), 7);
    }

    #[test]
    fn test_original_sequences_survive_consumption() {
        let mut p = proc(5, vec![9], vec![]);
        p.begin_burst();
        p.consume(5);
        assert_eq!(p.bursts(), &[9]);
        assert_eq!(p.total_burst(), 9);
    }

    #[test]
    fn test_demotion_ladder_floor() {
        assert_eq!(QueueLevel::Q1.demoted(), QueueLevel::Q2);
        assert_eq!(QueueLevel::Q2.demoted(), QueueLevel::Q3);
        assert_eq!(QueueLevel::Q3.demoted(), QueueLevel::Q3);
    }
}
