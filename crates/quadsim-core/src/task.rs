//! Task identities and the `Simulation` trait.
//!
//! `Simulation` is the public trait consumed by orchestration. Each task
//! body narrates its own lifecycle (Started/Exits bookend lines) as part
//! of its output; the runner only adds failure reporting around it.

use std::fmt;

use crate::sink::LineSink;

/// Error type for task bodies.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The task was given a configuration it cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The task panicked; the payload message is preserved.
    #[error("task panicked: {0}")]
    Panicked(String),
}

/// Identity of one of the four simulation tasks, in fixed spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskId {
    Fibonacci,
    NeedleDrop,
    EllipseArea,
    PinballHistogram,
}

impl TaskId {
    /// All four task identities in spawn order.
    pub const ALL: [TaskId; 4] = [
        TaskId::Fibonacci,
        TaskId::NeedleDrop,
        TaskId::EllipseArea,
        TaskId::PinballHistogram,
    ];

    /// Display name used in output narration.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TaskId::Fibonacci => "Fibonacci",
            TaskId::NeedleDrop => "Buffon's Needle",
            TaskId::EllipseArea => "Ellipse Area",
            TaskId::PinballHistogram => "Simple Pinball",
        }
    }

    /// Indentation prefix distinguishing this task's lines in the shared
    /// sink. The pinball task writes flush-left because its histogram rows
    /// are wide.
    #[must_use]
    pub fn indent(self) -> &'static str {
        match self {
            TaskId::Fibonacci => "   ",
            TaskId::NeedleDrop => "      ",
            TaskId::EllipseArea => "         ",
            TaskId::PinballHistogram => "",
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Public trait for simulation task bodies, consumed by orchestration.
///
/// A body runs to natural completion, streaming each output line to the
/// sink as it is produced. Bodies share no state with each other; the sink
/// is the only shared resource.
pub trait Simulation: Send + Sync {
    /// Get the identity of this task.
    fn id(&self) -> TaskId;

    /// Run the task body to completion.
    fn run(&self, sink: &LineSink) -> Result<(), TaskError>;

    /// Write one line to the sink, prefixed with this task's indentation.
    fn emit(&self, sink: &LineSink, msg: &str) {
        sink.write_line(&format!("{}{msg}", self.id().indent()));
    }
}
