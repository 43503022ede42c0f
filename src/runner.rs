//! The benchmark script: build the grid, then time both passes over it.

use std::thread;

use tracing::{error, info};

use crate::error::LocalityError;
use crate::grid::init::{DEFAULT_SEED, cell_count};
use crate::grid::{COLS, Grid, ROWS};
use crate::timing::{Measurement, measure_repeated};
use crate::traversal::Traversal;

/// Knobs for one benchmark run. `Default` is the reference experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
    /// Timed runs per pass; the reported elapsed time is their mean.
    pub iterations: usize,
    /// Run each pass once, untimed, before the timed runs.
    pub warmup: bool,
    /// Run the two passes on two threads sharing the grid.
    pub concurrent: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            seed: DEFAULT_SEED,
            iterations: 1,
            warmup: false,
            concurrent: false,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), LocalityError> {
        cell_count(self.rows, self.cols)?;
        if self.iterations == 0 {
            return Err(LocalityError::ZeroIterations);
        }
        Ok(())
    }
}

/// Both measurements from one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    pub stride_1: Measurement,
    pub stride_n: Measurement,
}

impl BenchReport {
    /// Loop order must never change the total.
    pub fn sums_match(&self) -> bool {
        self.stride_1.sum == self.stride_n.sum
    }

    /// How many times slower stride-N was than stride-1.
    ///
    /// `None` when stride-1 finished too fast to measure.
    pub fn slowdown(&self) -> Option<f64> {
        let base = self.stride_1.elapsed.as_secs_f64();
        (base > 0.0).then(|| self.stride_n.elapsed.as_secs_f64() / base)
    }

    pub fn measurements(&self) -> [Measurement; 2] {
        [self.stride_1, self.stride_n]
    }
}

/// Owns the grid and runs the two passes over it.
#[derive(Debug)]
pub struct LocalityBenchmark {
    config: BenchConfig,
    grid: Grid,
}

impl LocalityBenchmark {
    /// Validate `config` and allocate the grid.
    pub fn new(config: BenchConfig) -> Result<Self, LocalityError> {
        config.validate()?;
        let grid = Grid::random(config.rows, config.cols, config.seed)?;
        Ok(Self { config, grid })
    }

    /// Reuse an existing grid. `rows`, `cols` and `seed` in `config` are
    /// overwritten to describe it.
    pub fn with_grid(mut config: BenchConfig, grid: Grid) -> Result<Self, LocalityError> {
        config.rows = grid.rows();
        config.cols = grid.cols();
        config.validate()?;
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Time stride-1, then stride-N (or both at once when `concurrent`).
    pub fn run(&self) -> Result<BenchReport, LocalityError> {
        info!(
            rows = self.config.rows,
            cols = self.config.cols,
            iterations = self.config.iterations,
            concurrent = self.config.concurrent,
            "running locality benchmark"
        );

        let report = if self.config.concurrent {
            self.run_concurrent()?
        } else {
            BenchReport {
                stride_1: self.run_pass(Traversal::Stride1)?,
                stride_n: self.run_pass(Traversal::StrideN)?,
            }
        };

        if !report.sums_match() {
            error!(
                stride_1 = report.stride_1.sum,
                stride_n = report.stride_n.sum,
                "traversal sums disagree"
            );
        }
        Ok(report)
    }

    fn run_pass(&self, traversal: Traversal) -> Result<Measurement, LocalityError> {
        measure_repeated(
            traversal,
            &self.grid,
            self.config.iterations,
            self.config.warmup,
        )
    }

    fn run_concurrent(&self) -> Result<BenchReport, LocalityError> {
        let (stride_1, stride_n) = thread::scope(|s| {
            let h1 = s.spawn(|| self.run_pass(Traversal::Stride1));
            let hn = s.spawn(|| self.run_pass(Traversal::StrideN));
            (join(h1), join(hn))
        });
        Ok(BenchReport {
            stride_1: stride_1?,
            stride_n: stride_n?,
        })
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(v) => v,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
