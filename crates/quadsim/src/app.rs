//! Application wiring: build the run, invoke the orchestrator, summarize.

use std::sync::Arc;

use anyhow::Result;

use quadsim_core::LineSink;
use quadsim_orchestration::orchestrator::{self, RunOptions};
use quadsim_orchestration::runner::TerminalState;

use crate::config::AppConfig;

/// Run the application.
///
/// Task-internal failures are contained by the orchestration layer and do
/// not change the exit status; they are narrated on the sink during the
/// run and summarized on stderr after the join.
pub fn run(config: &AppConfig) -> Result<()> {
    let params = config.task_parameters();
    let options = RunOptions {
        base_seed: config.seed,
        iterative_fib: config.fast_fib,
    };
    let sink = Arc::new(LineSink::stdout());

    let reports = orchestrator::run(&params, &options, &sink);

    for report in reports
        .iter()
        .filter(|r| r.state() == TerminalState::Failed)
    {
        if let Err(e) = &report.outcome {
            eprintln!("Warning: {}: {e}", report.task);
        }
    }

    Ok(())
}
