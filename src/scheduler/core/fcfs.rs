//! FCFS Policy Engine - single-queue, non-preemptive
//!
//! Runs every dispatched burst to completion. The only scheduling freedom
//! is the eligibility order of the single ready container, so each step is
//! either an idle advance (the head has not arrived yet) or one full burst.
//!
//! # Step semantics
//! - Head not yet eligible: advance the clock to its arrival, account the
//!   gap as idle time, emit `Idle` and return without dispatching.
//! - Otherwise dispatch the head, run its burst to completion, then either
//!   finish the process or consume one I/O duration and re-enqueue it with
//!   a recomputed arrival time, re-sorting the container.

use super::SimulationOutcome;
use crate::scheduler::observe::{snapshot_all, StepEvent};
use crate::scheduler::process::{BurstOutcome, Process, ProcessState};
use crate::scheduler::queue::ReadyQueue;
use log::{debug, trace};

/// First-come-first-served scheduler
pub struct FcfsScheduler {
    queue: ReadyQueue,
    clock: u64,
    idle_time: u64,
    finished: Vec<Process>,
    events: Vec<StepEvent>,
}

impl FcfsScheduler {
    /// Seed the scheduler with a batch of processes
    pub fn new(batch: Vec<Process>) -> Self {
        let mut queue = ReadyQueue::new();
        for p in batch {
            queue.enqueue(p);
        }
        queue.resort();

        Self {
            queue,
            clock: 0,
            idle_time: 0,
            finished: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Run steps until the container is empty and collect the outcome
    pub fn run(mut self) -> SimulationOutcome {
        while !self.queue.is_empty() {
            self.step();
        }
        debug!(
            "[FCFS] run complete: t={} idle={} finished={}",
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

    /// Execute one scheduling step: an idle advance or one full burst
    fn step(&mut self) {
        let Some(head_arrival) = self.queue.head_arrival() else {
            return;
        };

        // Idle advance is its own observable transition. Correct only
        // because the resort keeps the next-eligible process at the head.
        if head_arrival > self.clock {
            let gap = head_arrival - self.clock;
            trace!("[FCFS] idle t={} -> t={}", self.clock, head_arrival);
            self.events.push(StepEvent::Idle {
                from: self.clock,
                to: head_arrival,
            });
            self.idle_time += gap;
            self.clock = head_arrival;
            return;
        }

        let Some(mut process) = self.queue.dequeue() else {
            return;
        };

        process.note_dispatched(self.clock);
        process.set_state(ProcessState::Running);
        let burst = process.begin_burst();
        debug!(
            "[FCFS] t={} dispatch P{} burst={}",
            self.clock,
            process.id(),
            burst
        );
        self.events.push(StepEvent::Dispatched {
            clock: self.clock,
            id: process.id(),
            level: None,
            queues: snapshot_all(&[(None, &self.queue)], self.clock),
        });

        // Non-preemptive: the whole burst runs
        self.clock += u64::from(burst);
        process.consume(burst);

        match process.complete_burst(self.clock) {
            BurstOutcome::Finished => {
                debug!("[FCFS] t={} P{} finished", self.clock, process.id());
                self.events.push(StepEvent::Finished {
                    clock: self.clock,
                    id: process.id(),
                });
                self.finished.push(process);
            }
            BurstOutcome::IoWait { duration } => {
                trace!(
                    "[FCFS] t={} P{} blocks {} io, re-arrives t={}",
                    self.clock,
                    process.id(),
                    duration,
                    process.arrival_time()
                );
                process.set_state(ProcessState::Ready);
                self.queue.enqueue(process);
                self.queue.resort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_two_processes_id_tiebreak() {
        // P1 [5] and P2 [3], both arrive at 0: the smaller id runs first
        let batch = vec![
            Process::new(1, vec![5], vec![]),
            Process::new(2, vec![3], vec![]),
        ];
        let outcome = FcfsScheduler::new(batch).run();

        assert_eq!(outcome.processes[0].completion_time(), Some(5));
        assert_eq!(outcome.processes[1].completion_time(), Some(8));
        assert_eq!(outcome.total_time, 8);
        assert_eq!(outcome.idle_time, 0);
        assert_eq!(outcome.processes[0].response_time(), Some(0));
        assert_eq!(outcome.processes[1].response_time(), Some(5));
    }

    #[test]
    fn test_idle_advance_is_a_distinct_step() {
        // single process: burst, 6 of io, burst again; the gap between
        // t=2 and t=8 must surface as one Idle event
        let batch = vec![Process::new(1, vec![2, 2], vec![6])];
        let outcome = FcfsScheduler::new(batch).run();

        assert_eq!(outcome.idle_time, 6);
        assert_eq!(outcome.total_time, 10);
        assert!(outcome
            .events
            .iter()
            .any(|e| matches!(e, StepEvent::Idle { from: 2, to: 8 })));
    }

    #[test]
    fn test_io_orders_requeue_by_arrival() {
        // P1 goes to io for a long time after its first burst; P2 must run
        // in the gap even though P1 was enqueued first
        let batch = vec![
            Process::new(1, vec![2, 1], vec![10]),
            Process::new(2, vec![4], vec![]),
        ];
        let outcome = FcfsScheduler::new(batch).run();

        // t=2 P1 -> io until 12; t=2..6 P2; idle 6..12; t=12..13 P1
        assert_eq!(outcome.processes[0].completion_time(), Some(13));
        assert_eq!(outcome.processes[1].completion_time(), Some(6));
        assert_eq!(outcome.idle_time, 6);
    }

    #[test]
    fn test_finished_never_requeued() {
        let batch = vec![
            Process::new(1, vec![1], vec![]),
            Process::new(2, vec![1], vec![]),
        ];
        let outcome = FcfsScheduler::new(batch).run();
        assert_eq!(outcome.processes.len(), 2);
        let dispatches = outcome
            .events
            .iter()
            .filter(|e| matches!(e, StepEvent::Dispatched { .. }))
            .count();
        assert_eq!(dispatches, 2);
    }
}
