//! Application configuration from CLI arguments.

use clap::Parser;

use quadsim_core::TaskParameters;

/// Usage message printed when too few arguments are given. This path
/// performs no work and exits with status 0.
pub const USAGE: &str = "Not enough arguments\nUsage: quadsim n r a b s x y";

/// QuadSim — four independent simulation tasks run concurrently.
#[derive(Parser, Debug)]
#[command(name = "quadsim", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Fibonacci index n.
    pub n: i64,

    /// Needle-toss trial count r.
    pub r: i64,

    /// Ellipse semi-major axis a.
    pub a: i64,

    /// Ellipse semi-minor axis b.
    pub b: i64,

    /// Ellipse sample count s.
    pub s: i64,

    /// Histogram bucket count x.
    pub x: i64,

    /// Ball-drop count y.
    pub y: i64,

    /// Base RNG seed for reproducible runs; each task derives its own seed.
    #[arg(long, env = "QUADSIM_SEED")]
    pub seed: Option<u64>,

    /// Compute Fibonacci iteratively instead of by naive recursion.
    #[arg(long)]
    pub fast_fib: bool,
}

impl AppConfig {
    /// Parse CLI arguments, returning the error instead of exiting so the
    /// caller can route missing-argument errors to the usage path.
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// The seven task parameters as an immutable record.
    #[must_use]
    pub fn task_parameters(&self) -> TaskParameters {
        TaskParameters {
            fib_n: self.n,
            needle_trials: self.r,
            semi_major: self.a,
            semi_minor: self.b,
            ellipse_samples: self.s,
            bucket_count: self.x,
            ball_drops: self.y,
        }
    }
}
