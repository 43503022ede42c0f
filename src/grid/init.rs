//! Seeded grid initialization.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::VALUE_BOUND;
use crate::error::LocalityError;

/// Seed used when the caller doesn't pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Number of cells in a `rows x cols` grid, rejecting zero and overflow.
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, LocalityError> {
    if rows == 0 || cols == 0 {
        return Err(LocalityError::EmptyDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(LocalityError::TooLarge { rows, cols })
}

/// Allocate `rows * cols` cells and fill each with a uniform value in
/// `[0, VALUE_BOUND)`.
///
/// Cells are drawn in row-major order from `StdRng::seed_from_u64(seed)`,
/// so the same seed always yields the same grid. The buffer is reserved
/// up front with `try_reserve_exact`; a failed reservation comes back as
/// [`LocalityError::Allocation`] instead of aborting.
pub fn fill_random(rows: usize, cols: usize, seed: u64) -> Result<Vec<i32>, LocalityError> {
    let cells = cell_count(rows, cols)?;

    let mut buf: Vec<i32> = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|source| LocalityError::Allocation { cells, source })?;

    let mut rng = StdRng::seed_from_u64(seed);
    buf.extend((0..cells).map(|_| rng.gen_range(0..VALUE_BOUND)));

    debug!(rows, cols, seed, cells, "grid initialized");
    Ok(buf)
}
