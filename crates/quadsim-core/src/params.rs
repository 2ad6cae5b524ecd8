//! The immutable seven-integer parameter record.

/// Parameters for one run, supplied once at startup.
///
/// Only parseability is validated; degenerate values (zero or negative
/// counts) are passed through and each task defines its own degenerate
/// behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskParameters {
    /// Fibonacci index `n`.
    pub fib_n: i64,
    /// Needle-toss trial count `r`.
    pub needle_trials: i64,
    /// Ellipse semi-major axis `a`.
    pub semi_major: i64,
    /// Ellipse semi-minor axis `b`.
    pub semi_minor: i64,
    /// Ellipse sample count `s`.
    pub ellipse_samples: i64,
    /// Pinball bucket count `x`.
    pub bucket_count: i64,
    /// Pinball ball-drop count `y`.
    pub ball_drops: i64,
}

impl TaskParameters {
    /// Echo of all seven parameters for operator visibility, emitted by
    /// the orchestrator before any task is spawned.
    #[must_use]
    pub fn echo_lines(&self) -> Vec<String> {
        [
            ("Fibonacci Input", self.fib_n),
            ("Buffon's Needle Iterations", self.needle_trials),
            ("Total Random Number Pairs", self.ellipse_samples),
            ("Semi-Major Axis Length", self.semi_major),
            ("Semi-Minor Axis Length", self.semi_minor),
            ("Number of Buckets", self.bucket_count),
            ("Number of Ball Droppings", self.ball_drops),
        ]
        .iter()
        .map(|(label, value)| format!("{label:<26} = {value}"))
        .collect()
    }
}
