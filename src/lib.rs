//! Stride-1 vs stride-N: how much memory layout costs.
//!
//! Sum the same 200 × 500 000 grid twice. Once row by row, where the
//! inner loop walks contiguous memory, and once column by column, where
//! every step jumps a whole row ahead. The totals are identical; the
//! timings are not. On a typical desktop the column-major pass is several
//! times slower, purely from cache misses.
//!
//! ## Usage
//!
//! ```
//! use locality::{BenchConfig, LocalityBenchmark};
//!
//! let config = BenchConfig { rows: 64, cols: 1024, ..BenchConfig::default() };
//! let bench = LocalityBenchmark::new(config).unwrap();
//! let report = bench.run().unwrap();
//!
//! assert!(report.sums_match());
//! ```
//!
//! Or call the traversals directly:
//!
//! ```
//! use locality::grid::Grid;
//! use locality::{sum_stride_1, sum_stride_n};
//!
//! let grid = Grid::random(8, 16, 7).unwrap();
//! assert_eq!(sum_stride_1(&grid), sum_stride_n(&grid));
//! ```
//!
//! ## What's inside
//!
//! - Seeded grid initialization (`StdRng`), so runs are reproducible
//! - Row-major and column-major summation
//! - `Instant`-based timing with optional warmup and averaging
//! - Optional concurrent mode running both passes on scoped threads

pub mod error;
pub mod grid;
pub mod logging;
pub mod report;
pub mod runner;
pub mod timing;
pub mod traversal;

pub use error::LocalityError;
pub use grid::Grid;
pub use runner::{BenchConfig, BenchReport, LocalityBenchmark};
pub use timing::Measurement;
pub use traversal::Traversal;
pub use traversal::stride_1::sum_stride_1;
pub use traversal::stride_n::sum_stride_n;
