//! # quadsim-core
//!
//! The four simulation task bodies (Fibonacci, needle-drop, ellipse area,
//! pinball histogram), the `Simulation` trait consumed by orchestration,
//! the per-task seeded RNG, and the line-atomic shared output sink.

pub mod ellipse;
pub mod fibonacci;
pub mod needle;
pub mod params;
pub mod pinball;
pub mod rng;
pub mod sink;
pub mod task;

pub use params::TaskParameters;
pub use sink::LineSink;
pub use task::{Simulation, TaskError, TaskId};
