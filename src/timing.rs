//! Timing a summation pass with a monotonic clock.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::LocalityError;
use crate::grid::Grid;
use crate::traversal::Traversal;

/// Result of one pass: the checksum and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub traversal: Traversal,
    pub sum: i64,
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time in whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms_f64(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run `traversal` once over `grid`, timing it with [`Instant`].
pub fn measure(traversal: Traversal, grid: &Grid) -> Measurement {
    let start = Instant::now();
    let sum = black_box(traversal.sum(black_box(grid)));
    let elapsed = start.elapsed();

    info!(
        traversal = traversal.name(),
        sum,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "pass finished"
    );
    Measurement {
        traversal,
        sum,
        elapsed,
    }
}

/// Run `traversal` `iterations` times and average the elapsed time.
///
/// With `warmup`, one untimed pass runs first to fault in pages and warm
/// the caches. The sum is the same every run, so the last one is kept.
pub fn measure_repeated(
    traversal: Traversal,
    grid: &Grid,
    iterations: usize,
    warmup: bool,
) -> Result<Measurement, LocalityError> {
    if iterations == 0 {
        return Err(LocalityError::ZeroIterations);
    }

    if warmup {
        black_box(traversal.sum(black_box(grid)));
    }

    let mut total = Duration::ZERO;
    let mut sum = 0;
    for _ in 0..iterations {
        let m = measure(traversal, grid);
        total += m.elapsed;
        sum = m.sum;
    }

    Ok(Measurement {
        traversal,
        sum,
        elapsed: total.div_f64(iterations as f64),
    })
}
