//! Monte-Carlo ellipse-area task.
//!
//! Samples points uniformly over the bounding quarter-rectangle
//! `[0, a) × [0, b)` and scales the hit ratio by the rectangle area `4ab`.

use std::f64::consts::PI;

use crate::rng::TaskRng;
use crate::sink::LineSink;
use crate::task::{Simulation, TaskError, TaskId};

/// Outcome of the sampling pass.
#[derive(Debug, Clone, Copy)]
pub struct EllipseEstimate {
    /// Samples that landed inside the ellipse.
    pub hits: i64,
    /// Monte-Carlo area estimate `(hits/s) * 4ab`.
    pub estimated_area: f64,
    /// Closed-form area `π * a * b`.
    pub actual_area: f64,
}

/// The ellipse-area task body.
pub struct EllipseAreaSim {
    semi_major: i64,
    semi_minor: i64,
    samples: i64,
    seed: u64,
}

impl EllipseAreaSim {
    #[must_use]
    pub fn new(semi_major: i64, semi_minor: i64, samples: i64, seed: u64) -> Self {
        Self {
            semi_major,
            semi_minor,
            samples,
            seed,
        }
    }

    /// Run the sampling pass.
    ///
    /// Degenerate inputs follow IEEE float semantics: a zero axis makes
    /// the hit test `0/0 = NaN` (never a hit), zero samples make the
    /// estimate NaN. Both are defined outcomes, not crashes.
    #[must_use]
    pub fn estimate(&self) -> EllipseEstimate {
        let a = self.semi_major as f64;
        let b = self.semi_minor as f64;
        let mut rng = TaskRng::from_seed(self.seed);

        let mut hits = 0i64;
        for _ in 0..self.samples {
            let x = rng.next_unit() * a;
            let y = rng.next_unit() * b;
            if (x * x) / (a * a) + (y * y) / (b * b) <= 1.0 {
                hits += 1;
            }
        }

        EllipseEstimate {
            hits,
            estimated_area: (hits as f64 / self.samples as f64) * 4.0 * a * b,
            actual_area: PI * a * b,
        }
    }
}

impl Simulation for EllipseAreaSim {
    fn id(&self) -> TaskId {
        TaskId::EllipseArea
    }

    fn run(&self, sink: &LineSink) -> Result<(), TaskError> {
        self.emit(sink, "Ellipse Area Task Started");
        self.emit(sink, &format!("Total Random Number Pairs {}", self.samples));
        self.emit(sink, &format!("Semi-Major Axis Length {}", self.semi_major));
        self.emit(sink, &format!("Semi-Minor Axis Length {}", self.semi_minor));

        let result = self.estimate();
        self.emit(sink, &format!("Total Hits {}", result.hits));
        self.emit(
            sink,
            &format!("Estimated Area is {:.5}", result.estimated_area),
        );
        self.emit(sink, &format!("Actual Area is {:.5}", result.actual_area));

        self.emit(sink, "Ellipse Area Task Exits");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_converges_on_the_closed_form() {
        let sim = EllipseAreaSim::new(10, 5, 100_000, 42);
        let result = sim.estimate();
        let expected = PI * 10.0 * 5.0;
        let relative = (result.estimated_area - expected).abs() / expected;
        assert!(
            relative < 0.05,
            "estimate {} off closed-form {} by {relative}",
            result.estimated_area,
            expected
        );
        assert!((result.actual_area - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_samples_is_defined_not_a_crash() {
        let result = EllipseAreaSim::new(10, 5, 0, 42).estimate();
        assert_eq!(result.hits, 0);
        assert!(result.estimated_area.is_nan());
    }

    #[test]
    fn zero_axis_scores_no_hits() {
        let result = EllipseAreaSim::new(0, 5, 1000, 42).estimate();
        assert_eq!(result.hits, 0);
        assert_eq!(result.estimated_area, 0.0);
    }

    #[test]
    fn hits_never_exceed_samples() {
        let result = EllipseAreaSim::new(3, 7, 2500, 11).estimate();
        assert!(result.hits >= 0);
        assert!(result.hits <= 2500);
    }

    #[test]
    fn run_narrates_echo_results_and_bookends() {
        let sink = LineSink::memory();
        EllipseAreaSim::new(10, 5, 100, 1).run(&sink).unwrap();
        let lines = sink.lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "         Ellipse Area Task Started");
        assert_eq!(lines[1], "         Total Random Number Pairs 100");
        assert!(lines[6].starts_with("         Actual Area is 157.07963"));
        assert_eq!(lines[7], "         Ellipse Area Task Exits");
    }
}
