//! Statistics - per-process and batch performance metrics
//!
//! Consumes the finished-process list and the final clock/idle values.
//! Waiting time is derived from the original burst and I/O sequences,
//! which the engines never mutate, so the conservation identity
//! `completion = bursts + io + waiting` holds exactly.

use super::SimulationOutcome;
use crate::scheduler::process::ProcessId;

/// Metrics for one completed process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub id: ProcessId,
    /// Time spent ready but not executing
    pub waiting_time: u64,
    /// Completion time, measured from the simulation start at 0
    pub turnaround_time: u64,
    /// Instant of first dispatch
    pub response_time: u64,
}

/// Aggregate metrics for one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub total_time: u64,
    pub idle_time: u64,
    pub per_process: Vec<ProcessMetrics>,
}

impl SimulationReport {
    /// Derive the report from an engine outcome
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        let per_process = outcome
            .processes
            .iter()
            .map(|p| {
                let completion = p.completion_time().unwrap_or(0);
                ProcessMetrics {
                    id: p.id(),
                    waiting_time: completion - p.total_burst() - p.total_io(),
                    turnaround_time: completion,
                    response_time: p.response_time().unwrap_or(0),
                }
            })
            .collect();

        Self {
            total_time: outcome.total_time,
            idle_time: outcome.idle_time,
            per_process,
        }
    }

    /// CPU utilization as a percentage of the total run time
    pub fn cpu_utilization(&self) -> f64 {
        if self.total_time == 0 {
            return 0.0;
        }
        (self.total_time - self.idle_time) as f64 / self.total_time as f64 * 100.0
    }

    /// Average waiting time over the actual batch size
    pub fn avg_waiting_time(&self) -> f64 {
        self.average(|m| m.waiting_time)
    }

    /// Average turnaround time over the actual batch size
    pub fn avg_turnaround_time(&self) -> f64 {
        self.average(|m| m.turnaround_time)
    }

    /// Average response time over the actual batch size
    pub fn avg_response_time(&self) -> f64 {
        self.average(|m| m.response_time)
    }

    fn average(&self, metric: impl Fn(&ProcessMetrics) -> u64) -> f64 {
        if self.per_process.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.per_process.iter().map(metric).sum();
        sum as f64 / self.per_process.len() as f64
    }
}
