use crate::grid::Grid;

/// Cache-hostile summation: column by column, row index innermost.
///
/// Same cells, same total as [`sum_stride_1`](super::stride_1::sum_stride_1),
/// but with `j` fixed the inner loop jumps `cols` elements per step. For
/// the default 500 000-column grid that's ~2 MB between consecutive loads,
/// so nearly every access touches a fresh cache line and page.
///
/// Use this to measure the cost of ignoring layout, not for real work.
pub fn sum_stride_n(grid: &Grid) -> i64 {
    let (rows, cols) = (grid.rows(), grid.cols());
    let cells = grid.as_slice();

    let mut sum = 0i64;
    for j in 0..cols {
        for i in 0..rows {
            sum += cells[i * cols + j] as i64;
        }
    }
    sum
}
