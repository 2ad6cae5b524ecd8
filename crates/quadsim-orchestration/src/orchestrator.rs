//! Fan-out/fan-in orchestration of the four simulation tasks.
//!
//! Tasks are spawned in a fixed order, one OS thread each, and joined in
//! whatever order they finish. The orchestrator blocks until all four
//! reports have arrived and every thread handle is joined, so no task can
//! be leaked even when its body fails.

use std::sync::Arc;
use std::thread;

use quadsim_core::ellipse::EllipseAreaSim;
use quadsim_core::fibonacci::FibonacciSim;
use quadsim_core::needle::NeedleDropSim;
use quadsim_core::pinball::PinballSim;
use quadsim_core::rng::seed_for_task;
use quadsim_core::{LineSink, Simulation, TaskParameters};

use crate::runner::{run_task, TaskReport};

/// Run-wide options beyond the seven task parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Base seed for reproducible runs; each task derives its own seed
    /// from it. `None` seeds every task from OS entropy.
    pub base_seed: Option<u64>,
    /// Use the iterative Fibonacci variant instead of naive recursion.
    pub iterative_fib: bool,
}

/// Build the four task bodies in fixed spawn order.
#[must_use]
pub fn build_simulations(
    params: &TaskParameters,
    options: &RunOptions,
) -> Vec<Arc<dyn Simulation>> {
    let seed = |index| seed_for_task(options.base_seed, index);
    vec![
        Arc::new(FibonacciSim::new(params.fib_n, options.iterative_fib)),
        Arc::new(NeedleDropSim::new(params.needle_trials, seed(1))),
        Arc::new(EllipseAreaSim::new(
            params.semi_major,
            params.semi_minor,
            params.ellipse_samples,
            seed(2),
        )),
        Arc::new(PinballSim::new(
            params.bucket_count,
            params.ball_drops,
            seed(3),
        )),
    ]
}

/// Run a full orchestration: startup narration, parameter echo, fixed-order
/// spawn, unordered join, exit narration. Returns one report per task.
///
/// Task failures are contained by the runner and reflected in the reports;
/// the orchestrator itself always reaches its exit notice.
pub fn run(
    params: &TaskParameters,
    options: &RunOptions,
    sink: &Arc<LineSink>,
) -> Vec<TaskReport> {
    sink.write_line("Orchestrator Started");
    for line in params.echo_lines() {
        sink.write_line(&line);
    }
    sink.write_line("");

    let reports = run_simulations(build_simulations(params, options), sink);

    sink.write_line("Orchestrator Exits");
    reports
}

/// Spawn one thread per simulation and block until every one has reached
/// a terminal state. Reports are collected in completion order.
pub fn run_simulations(
    sims: Vec<Arc<dyn Simulation>>,
    sink: &Arc<LineSink>,
) -> Vec<TaskReport> {
    let (tx, rx) = crossbeam_channel::unbounded::<TaskReport>();
    let mut handles = Vec::with_capacity(sims.len());

    for sim in sims {
        let name = sim.id().name();
        let task_sink = Arc::clone(sink);
        let tx = tx.clone();
        handles.push(thread::spawn(move || {
            let _ = tx.send(run_task(sim.as_ref(), &task_sink));
        }));
        sink.write_line(&format!("{name} Task Created"));
    }
    drop(tx);

    sink.write_line("Orchestrator Waits");

    // The channel yields reports in arrival order and closes once every
    // worker has sent its report and hung up.
    let reports: Vec<TaskReport> = rx.iter().collect();

    for handle in handles {
        if handle.join().is_err() {
            // The runner catches body panics, so a panicking worker thread
            // would indicate a bug in the runner itself.
            tracing::error!("worker thread panicked outside the task runner");
        }
    }

    reports
}
