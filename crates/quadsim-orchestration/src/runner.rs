//! The generic task runner.
//!
//! Wraps one task body so that its failure, including a panic, is
//! contained: it is timed, logged with the task identity, narrated on the
//! shared sink, and recorded as a failed terminal state. A failure never
//! reaches sibling tasks or the orchestrator.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use quadsim_core::{LineSink, Simulation, TaskError, TaskId};

/// Final status of a task after it will not run further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Succeeded,
    Failed,
}

/// Report produced for every spawned task, exactly one per task per run.
#[derive(Debug)]
pub struct TaskReport {
    /// Which task this report is for.
    pub task: TaskId,
    /// The task's outcome.
    pub outcome: Result<(), TaskError>,
    /// Wall-clock run time of the task body.
    pub duration: Duration,
}

impl TaskReport {
    /// The terminal state this report represents.
    #[must_use]
    pub fn state(&self) -> TerminalState {
        if self.outcome.is_ok() {
            TerminalState::Succeeded
        } else {
            TerminalState::Failed
        }
    }
}

/// Execute one task body to its terminal state.
pub fn run_task(sim: &dyn Simulation, sink: &LineSink) -> TaskReport {
    let task = sim.id();
    let start = Instant::now();

    let outcome = match panic::catch_unwind(AssertUnwindSafe(|| sim.run(sink))) {
        Ok(result) => result,
        Err(payload) => Err(TaskError::Panicked(panic_message(payload.as_ref()))),
    };
    let duration = start.elapsed();

    if let Err(e) = &outcome {
        tracing::warn!(task = %task, error = %e, "task failed");
        sink.write_line(&format!("{}{} Task Failed: {e}", task.indent(), task.name()));
    }

    TaskReport {
        task,
        outcome,
        duration,
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
