//! # quadsim-orchestration
//!
//! Spawns the four simulation tasks, contains their failures, and joins
//! on all of them before declaring the run complete.

pub mod orchestrator;
pub mod runner;

pub use orchestrator::{build_simulations, run, RunOptions};
pub use runner::{run_task, TaskReport, TerminalState};
