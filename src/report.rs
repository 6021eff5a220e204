//! Console Reporter - trace and results rendering
//!
//! Pure presentation over the step-observation trace and the metrics
//! report; the engines never print.

use crate::scheduler::core::SimulationReport;
use crate::scheduler::observe::StepEvent;

const RULE: &str = "..................................................";

/// Render the per-step trace of a run
pub fn print_trace(events: &[StepEvent]) {
    for event in events {
        match event {
            StepEvent::Dispatched {
                clock,
                id,
                level,
                queues,
            } => {
                println!("Current time: {}", clock);
                match level {
                    Some(level) => println!("Now running: P{} ({})", id, level),
                    None => println!("Now running: P{}", id),
                }
                println!("{}", RULE);
                println!("Ready queue:\tProcess\tBurst\tQueue");
                for snap in queues {
                    for entry in &snap.ready {
                        match snap.level {
                            Some(level) => {
                                println!("\t\tP{}\t{}\t{}", entry.id, entry.next_burst, level)
                            }
                            None => println!("\t\tP{}\t{}", entry.id, entry.next_burst),
                        }
                    }
                }
                println!("Now in I/O:\tProcess\tRemaining I/O time");
                for snap in queues {
                    for entry in &snap.waiting {
                        println!("\t\tP{}\t{}", entry.id, entry.remaining_io);
                    }
                }
                println!();
            }
            StepEvent::Preempted {
                clock,
                id,
                ran_for,
                remaining,
            } => {
                println!(
                    "P{} preempted at t={} after {} units ({} remaining)\n",
                    id, clock, ran_for, remaining
                );
            }
            StepEvent::Demoted {
                clock,
                id,
                from,
                to,
                remaining,
            } => {
                println!(
                    "P{} demoted {} -> {} at t={} ({} remaining)\n",
                    id, from, to, clock, remaining
                );
            }
            StepEvent::Finished { clock, id } => {
                println!("-------P{} has finished executing at t={}-------\n", id, clock);
            }
            StepEvent::Idle { from, to } => {
                println!("CPU idle from t={} to t={}\n", from, to);
            }
        }
    }
}

/// Render the results block of a run
pub fn print_report(title: &str, report: &SimulationReport) {
    println!("{} Simulation Results:\n", title);
    println!("Total Time: {}", report.total_time);
    println!("CPU Utilization: {:.2}%", report.cpu_utilization());
    println!("{}", RULE);
    println!("Process\tWaiting\tTurnaround\tResponse");
    for m in &report.per_process {
        println!(
            "P{}\t{}\t{}\t\t{}",
            m.id, m.waiting_time, m.turnaround_time, m.response_time
        );
    }
    println!("{}", RULE);
    println!("Average Waiting time:    {:.2}", report.avg_waiting_time());
    println!("Average Turnaround time: {:.2}", report.avg_turnaround_time());
    println!("Average Response time:   {:.2}", report.avg_response_time());
    println!();
}
