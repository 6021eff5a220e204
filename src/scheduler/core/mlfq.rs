//! MLFQ Policy Engine - three-level feedback queue
//!
//! Q1 and Q2 are round robin with quanta `tq1` and `tq2`; Q3 is FCFS with
//! no quantum. Dispatch scans the levels in strict priority order. A burst
//! that outlives its level quantum demotes the process one level; a burst
//! that completes promotes the process back to Q1. Q2 and Q3 dispatches
//! are preemptible: if a higher-level head becomes eligible strictly
//! before the intended run interval ends, execution truncates at that
//! arrival and the process re-queues on its current level.
//!
//! # Dispatch order per step
//! 1. Q1 head eligible (first-execution heads are always eligible)
//! 2. Q2 head eligible, preemption checked against Q1
//! 3. Q3 head eligible, preemption checked against Q1 then Q2
//! 4. Nothing eligible: idle-advance to the earliest head arrival

use super::SimulationOutcome;
use crate::scheduler::observe::{snapshot_all, StepEvent};
use crate::scheduler::process::{BurstOutcome, Process, ProcessState, QueueLevel};
use crate::scheduler::queue::ReadyQueue;
use log::{debug, trace};

/// Multi-level feedback queue scheduler
pub struct MlfqScheduler {
    q1: ReadyQueue,
    q2: ReadyQueue,
    q3: ReadyQueue,
    tq1: u32,
    tq2: u32,
    clock: u64,
    idle_time: u64,
    finished: Vec<Process>,
    events: Vec<StepEvent>,
}

impl MlfqScheduler {
    /// Seed the scheduler with a batch of processes, all starting on Q1
    ///
    /// Both quanta must be positive; the CLI validates this before
    /// construction.
    pub fn new(batch: Vec<Process>, tq1: u32, tq2: u32) -> Self {
        debug_assert!(tq1 > 0 && tq2 > 0);

        let mut q1 = ReadyQueue::new();
        for mut p in batch {
            p.set_level(QueueLevel::Q1);
            q1.enqueue(p);
        }
        q1.resort();

        Self {
            q1,
            q2: ReadyQueue::new(),
            q3: ReadyQueue::new(),
            tq1,
            tq2,
            clock: 0,
            idle_time: 0,
            finished: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Run steps until all three containers are empty
    pub fn run(mut self) -> SimulationOutcome {
        while !(self.q1.is_empty() && self.q2.is_empty() && self.q3.is_empty()) {
            self.step();
        }
        debug!(
            "[MLFQ] run complete: t={} idle={} finished={}",
            self.clock,
            self.idle_time,
            self.finished.len()
        );

        self.finished.sort_by_key(Process::id);
        SimulationOutcome {
            processes: self.finished,
            total_time: self.clock,
            idle_time: self.idle_time,
            events: self.events,
        }
    }

    /// Execute one scheduling step: dispatch from the highest eligible
    /// level or idle-advance the clock
    fn step(&mut self) {
        if self.head_eligible(QueueLevel::Q1) {
            self.dispatch(QueueLevel::Q1);
        } else if self.head_eligible(QueueLevel::Q2) {
            self.dispatch(QueueLevel::Q2);
        } else if self.head_eligible(QueueLevel::Q3) {
            self.dispatch(QueueLevel::Q3);
        } else {
            self.idle_advance();
        }
    }

    fn queue(&self, level: QueueLevel) -> &ReadyQueue {
        match level {
            QueueLevel::Q1 => &self.q1,
            QueueLevel::Q2 => &self.q2,
            QueueLevel::Q3 => &self.q3,
        }
    }

    fn queue_mut(&mut self, level: QueueLevel) -> &mut ReadyQueue {
        match level {
            QueueLevel::Q1 => &mut self.q1,
            QueueLevel::Q2 => &mut self.q2,
            QueueLevel::Q3 => &mut self.q3,
        }
    }

    /// Quantum granted at a level; Q3 is unbounded
    fn quantum(&self, level: QueueLevel) -> Option<u32> {
        match level {
            QueueLevel::Q1 => Some(self.tq1),
            QueueLevel::Q2 => Some(self.tq2),
            QueueLevel::Q3 => None,
        }
    }

    /// Is the head of `level` eligible to run at the current clock?
    ///
    /// Freshly seeded processes that have never executed count as
    /// eligible on Q1 regardless of arrival time.
    fn head_eligible(&self, level: QueueLevel) -> bool {
        match self.queue(level).peek() {
            Some(head) => {
                head.arrival_time() <= self.clock
                    || (level == QueueLevel::Q1 && head.first_execution())
            }
            None => false,
        }
    }

    /// Earliest arrival among the given higher levels that falls strictly
    /// inside the run interval ending at `end`, checked in priority order
    /// (the first level with an arrival inside the interval wins)
    fn preemption_instant(&self, higher: &[QueueLevel], end: u64) -> Option<u64> {
        for &level in higher {
            if let Some(arrival) = self.queue(level).head_arrival() {
                if arrival < end {
                    return Some(arrival);
                }
            }
        }
        None
    }

    /// Dispatch the head of `level` and apply one slice of execution
    fn dispatch(&mut self, level: QueueLevel) {
        let Some(mut process) = self.queue_mut(level).dequeue() else {
            return;
        };

        process.note_dispatched(self.clock);
        process.set_state(ProcessState::Running);
        let remaining = process.begin_burst();
        debug!(
            "[MLFQ] t={} dispatch P{} from {} remaining={}",
            self.clock,
            process.id(),
            level,
            remaining
        );
        self.events.push(StepEvent::Dispatched {
            clock: self.clock,
            id: process.id(),
            level: Some(level),
            queues: snapshot_all(
                &[
                    (Some(QueueLevel::Q1), &self.q1),
                    (Some(QueueLevel::Q2), &self.q2),
                    (Some(QueueLevel::Q3), &self.q3),
                ],
                self.clock,
            ),
        });

        // Intended run interval: the burst remainder capped by the level
        // quantum. Higher-level arrivals inside it truncate the slice.
        let slice = match self.quantum(level) {
            Some(tq) => remaining.min(tq),
            None => remaining,
        };
        let preempt_at = match level {
            QueueLevel::Q1 => None,
            QueueLevel::Q2 => {
                self.preemption_instant(&[QueueLevel::Q1], self.clock + u64::from(slice))
            }
            QueueLevel::Q3 => self.preemption_instant(
                &[QueueLevel::Q1, QueueLevel::Q2],
                self.clock + u64::from(slice),
            ),
        };

        if let Some(at) = preempt_at {
            // The head of a higher queue was not eligible at dispatch, so
            // its arrival lies strictly after the current clock.
            debug_assert!(at > self.clock);
            let ran_for = at - self.clock;
            process.consume(ran_for as u32);
            self.clock = at;
            process.set_arrival_time(self.clock);
            process.set_state(ProcessState::Ready);
            debug!(
                "[MLFQ] t={} preempt P{} after {} (remaining {})",
                self.clock,
                process.id(),
                ran_for,
                process.pending_burst()
            );
            self.events.push(StepEvent::Preempted {
                clock: self.clock,
                id: process.id(),
                ran_for,
                remaining: process.pending_burst(),
            });
            // The process keeps its place on its own level
            self.queue_mut(level).enqueue(process);
            self.queue_mut(level).resort();
            return;
        }

        let fits = match self.quantum(level) {
            Some(tq) => remaining <= tq,
            None => true,
        };

        if fits {
            // The burst runs to completion within the slice
            self.clock += u64::from(remaining);
            process.consume(remaining);
            match process.complete_burst(self.clock) {
                BurstOutcome::Finished => {
                    debug!("[MLFQ] t={} P{} finished on {}", self.clock, process.id(), level);
                    self.events.push(StepEvent::Finished {
                        clock: self.clock,
                        id: process.id(),
                    });
                    self.finished.push(process);
                }
                BurstOutcome::IoWait { duration } => {
                    // Completing a burst promotes the process back to Q1
                    trace!(
                        "[MLFQ] t={} P{} burst done, {} io, back to Q1 at t={}",
                        self.clock,
                        process.id(),
                        duration,
                        process.arrival_time()
                    );
                    process.set_level(QueueLevel::Q1);
                    process.set_state(ProcessState::Ready);
                    self.q1.enqueue(process);
                    self.q1.resort();
                }
            }
        } else {
            // Quantum expired with work left: demote one level.
            // Unreachable from Q3, which has no quantum.
            let tq = match self.quantum(level) {
                Some(tq) => tq,
                None => return,
            };
            self.clock += u64::from(tq);
            process.consume(tq);
            process.set_arrival_time(self.clock);
            let to = level.demoted();
            process.set_level(to);
            process.set_state(ProcessState::Ready);
            debug!(
                "[MLFQ] t={} P{} quantum expired, {} -> {} (remaining {})",
                self.clock,
                process.id(),
                level,
                to,
                process.pending_burst()
            );
            self.events.push(StepEvent::Demoted {
                clock: self.clock,
                id: process.id(),
                from: level,
                to,
                remaining: process.pending_burst(),
            });
            self.queue_mut(to).enqueue(process);
            self.queue_mut(to).resort();
        }
    }

    /// Advance the clock to the earliest head arrival across all levels,
    /// accounting the gap as idle time
    fn idle_advance(&mut self) {
        let next = [
            self.q1.head_arrival(),
            self.q2.head_arrival(),
            self.q3.head_arrival(),
        ]
        .into_iter()
        .flatten()
        .min();

        let Some(next) = next else {
            return;
        };
        debug_assert!(next > self.clock);
        trace!("[MLFQ] idle t={} -> t={}", self.clock, next);
        self.events.push(StepEvent::Idle {
            from: self.clock,
            to: next,
        });
        self.idle_time += next - self.clock;
        self.clock = next;
    }
}
