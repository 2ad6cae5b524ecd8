//! Buffon-style needle-drop task.
//!
//! Gap width and needle length are both 1. Each trial draws a drop height
//! `d` in `[0, 1)` and an angle in `[0, 2π)`; the toss is a miss when the
//! needle end `d + sin θ` leaves the `[0, 1]` strip.

use std::f64::consts::PI;

use crate::rng::TaskRng;
use crate::sink::LineSink;
use crate::task::{Simulation, TaskError, TaskId};

/// The needle-drop task body.
pub struct NeedleDropSim {
    trials: i64,
    seed: u64,
}

impl NeedleDropSim {
    #[must_use]
    pub fn new(trials: i64, seed: u64) -> Self {
        Self { trials, seed }
    }

    /// Estimated miss probability over `trials` tosses.
    ///
    /// Zero trials yields `0/0 = NaN`, the defined degenerate outcome;
    /// negative trial counts run zero tosses.
    #[must_use]
    pub fn estimate(&self) -> f64 {
        let mut rng = TaskRng::from_seed(self.seed);
        let mut misses = 0i64;
        for _ in 0..self.trials {
            let d = rng.next_unit();
            let angle = rng.next_unit() * 2.0 * PI;
            let height = d + angle.sin();
            if !(0.0..=1.0).contains(&height) {
                misses += 1;
            }
        }
        misses as f64 / self.trials as f64
    }
}

impl Simulation for NeedleDropSim {
    fn id(&self) -> TaskId {
        TaskId::NeedleDrop
    }

    fn run(&self, sink: &LineSink) -> Result<(), TaskError> {
        self.emit(sink, "Buffon's Needle Task Started");
        self.emit(sink, &format!("Input Number {}", self.trials));

        let probability = self.estimate();
        self.emit(
            sink,
            &format!("Estimated Probability is {probability:.5}"),
        );

        self.emit(sink, "Buffon's Needle Task Exits");
        Ok(())
    }
}
