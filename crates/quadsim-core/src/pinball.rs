//! Pinball (bean-machine) histogram task.
//!
//! Each ball starts at the middle of `x` buckets and falls through `x - 1`
//! peg levels, moving ±0.5 per level with equal probability. The final
//! position determines the bucket, and the task reports one histogram row
//! per bucket.

use crate::rng::TaskRng;
use crate::sink::LineSink;
use crate::task::{Simulation, TaskError, TaskId};

/// Maximum bar length of the widest histogram row.
const BAR_WIDTH: usize = 50;

/// The pinball-histogram task body.
pub struct PinballSim {
    buckets: i64,
    drops: i64,
    seed: u64,
}

impl PinballSim {
    #[must_use]
    pub fn new(buckets: i64, drops: i64, seed: u64) -> Self {
        Self {
            buckets,
            drops,
            seed,
        }
    }

    /// Drop all balls and count landings per bucket.
    ///
    /// Errors when the bucket count is below 1; a negative or zero drop
    /// count yields an all-zero histogram.
    pub fn simulate(&self) -> Result<Vec<i64>, TaskError> {
        if self.buckets < 1 {
            return Err(TaskError::InvalidConfig(format!(
                "bucket count must be at least 1, got {}",
                self.buckets
            )));
        }

        let mut rng = TaskRng::from_seed(self.seed);
        let mut counts = vec![0i64; self.buckets as usize];
        for _ in 0..self.drops {
            let mut pos = self.buckets as f64 / 2.0 + 0.5;
            for _ in 0..self.buckets - 1 {
                if rng.next_unit() > 0.5 {
                    pos += 0.5;
                } else {
                    pos -= 0.5;
                }
            }
            // By construction the final position is in [1, buckets];
            // clamp keeps a float rounding surprise in bounds.
            let index = (pos.floor() as i64 - 1).clamp(0, self.buckets - 1);
            counts[index as usize] += 1;
        }
        Ok(counts)
    }

    /// Format one histogram row: 1-based bucket number, raw count,
    /// percentage of all drops, and a bar scaled to the max-count bucket.
    #[must_use]
    pub fn histogram_row(bucket: usize, count: i64, drops: i64, max_count: i64) -> String {
        let percent = if drops > 0 {
            count as f64 / drops as f64 * 100.0
        } else {
            0.0
        };
        let stars = if max_count > 0 {
            (count as f64 / max_count as f64 * BAR_WIDTH as f64) as usize
        } else {
            0
        };
        format!(
            "{:>3}-({:>7})-({:>5.2})|{}",
            bucket + 1,
            count,
            percent,
            "*".repeat(stars)
        )
    }
}

impl Simulation for PinballSim {
    fn id(&self) -> TaskId {
        TaskId::PinballHistogram
    }

    fn run(&self, sink: &LineSink) -> Result<(), TaskError> {
        self.emit(sink, "Simple Pinball Task Started");
        self.emit(sink, &format!("Number of Buckets {}", self.buckets));
        self.emit(sink, &format!("Number of Ball Droppings {}", self.drops));

        let counts = self.simulate()?;
        let max_count = counts.iter().copied().max().unwrap_or(0);
        for (bucket, &count) in counts.iter().enumerate() {
            self.emit(
                sink,
                &Self::histogram_row(bucket, count, self.drops, max_count),
            );
        }

        self.emit(sink, "Simple Pinball Task Exits");
        Ok(())
    }
}
