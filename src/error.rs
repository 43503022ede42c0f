//! Error type shared by the grid, the benchmark runner and the binary.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalityError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("grid {rows}x{cols} does not fit in the address space")]
    TooLarge { rows: usize, cols: usize },

    #[error("failed to allocate {cells} grid cells")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("expected {expected} cells for the grid shape, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("cell {index} holds {value}, outside [0, {bound})")]
    ValueOutOfRange { index: usize, value: i32, bound: i32 },

    #[error("iterations must be at least 1")]
    ZeroIterations,
}
