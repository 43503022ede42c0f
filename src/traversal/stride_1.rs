use crate::grid::Grid;

/// Cache-friendly summation: row by row, column index innermost.
///
/// With `i` fixed, `j` sweeps a contiguous row, so every load is the
/// neighbour of the previous one (stride 1). A cache line fetched for
/// `grid[i][j]` also serves the next several columns, and the hardware
/// prefetcher sees a simple linear stream.
///
/// This is the fast pass the stride-N order is compared against.
///
/// # Example
///
/// ```
/// use locality::grid::Grid;
/// use locality::traversal::stride_1::sum_stride_1;
///
/// let grid = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(sum_stride_1(&grid), 21);
/// ```
pub fn sum_stride_1(grid: &Grid) -> i64 {
    let (rows, cols) = (grid.rows(), grid.cols());
    let cells = grid.as_slice();

    let mut sum = 0i64;
    for i in 0..rows {
        for j in 0..cols {
            sum += cells[i * cols + j] as i64;
        }
    }
    sum
}
