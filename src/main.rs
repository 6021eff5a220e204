//! schedsim CLI entry point
//!
//! Loads a batch file, runs the selected scheduling policies and prints
//! the metric tables (and optionally the per-step trace).

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use schedsim::scheduler::core::{FcfsScheduler, MlfqScheduler, SimulationReport};
use schedsim::{loader, report};

/// CPU scheduling simulator: FCFS and three-level MLFQ
#[derive(Parser)]
#[command(name = "schedsim", version, about)]
struct Cli {
    /// Batch file, one process per line: P<id>,<burst>[,<io>,<burst>]*
    input: PathBuf,

    /// Scheduling policy to simulate
    #[arg(long, value_enum, default_value = "both")]
    policy: PolicyArg,

    /// Time quantum of the level-1 round robin queue
    #[arg(long, default_value_t = 7)]
    tq1: u32,

    /// Time quantum of the level-2 round robin queue
    #[arg(long, default_value_t = 14)]
    tq2: u32,

    /// Print the per-step dispatch trace before the results
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Mlfq,
    Both,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    ensure!(cli.tq1 > 0, "tq1 must be at least 1");
    ensure!(cli.tq2 > 0, "tq2 must be at least 1");

    let batch = loader::load_batch(&cli.input)
        .with_context(|| format!("failed to load batch file {}", cli.input.display()))?;
    info!(
        "loaded {} processes from {}",
        batch.len(),
        cli.input.display()
    );

    if matches!(cli.policy, PolicyArg::Fcfs | PolicyArg::Both) {
        let outcome = FcfsScheduler::new(batch.clone()).run();
        if cli.trace {
            report::print_trace(&outcome.events);
        }
        report::print_report("FCFS", &SimulationReport::from_outcome(&outcome));
    }

    if matches!(cli.policy, PolicyArg::Mlfq | PolicyArg::Both) {
        let outcome = MlfqScheduler::new(batch, cli.tq1, cli.tq2).run();
        if cli.trace {
            report::print_trace(&outcome.events);
        }
        report::print_report("MLFQ", &SimulationReport::from_outcome(&outcome));
    }

    Ok(())
}
