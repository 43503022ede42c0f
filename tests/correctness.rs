use locality::grid::init::{DEFAULT_SEED, fill_random};
use locality::grid::{COLS, Grid, ROWS, VALUE_BOUND};
use locality::timing::{measure, measure_repeated};
use locality::{
    BenchConfig, LocalityBenchmark, LocalityError, Traversal, sum_stride_1, sum_stride_n,
};

fn assert_sums_equal(grid: &Grid, name: &str) -> i64 {
    let s1 = sum_stride_1(grid);
    let sn = sum_stride_n(grid);
    assert_eq!(
        s1,
        sn,
        "{}: stride-1 sum {} != stride-N sum {}",
        name,
        s1,
        sn
    );
    s1
}

fn small_config(rows: usize, cols: usize) -> BenchConfig {
    BenchConfig {
        rows,
        cols,
        ..BenchConfig::default()
    }
}

// ============================================================
// Known-value grids
// ============================================================

#[test]
fn test_2x3_known_sum() {
    let grid = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(assert_sums_equal(&grid, "2x3"), 21);
}

#[test]
fn test_all_nines() {
    let (rows, cols) = (17, 31);
    let grid = Grid::from_vec(rows, cols, vec![9; rows * cols]).unwrap();
    assert_eq!(assert_sums_equal(&grid, "nines"), 9 * (rows * cols) as i64);
}

#[test]
fn test_all_zeros() {
    let grid = Grid::from_vec(5, 7, vec![0; 35]).unwrap();
    assert_eq!(assert_sums_equal(&grid, "zeros"), 0);
}

#[test]
fn test_grid_accessors_are_row_major() {
    let cells: Vec<i32> = (0..12).map(|i| i % 10).collect();
    let grid = Grid::from_vec(3, 4, cells).unwrap();

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.len(), 12);
    assert!(!grid.is_empty());
    assert_eq!(grid.get(0, 3), 3);
    assert_eq!(grid.get(2, 1), 9);
    assert_eq!(grid.row(1), &[4, 5, 6, 7]);
}

// ============================================================
// Seeded initialization
// ============================================================

#[test]
fn test_values_in_range() {
    let shapes = [(1, 1), (3, 7), (64, 64), (10, 5_000)];

    for (rows, cols) in shapes {
        let grid = Grid::random(rows, cols, DEFAULT_SEED).unwrap();
        assert_eq!(grid.len(), rows * cols);
        assert!(
            grid.as_slice().iter().all(|&v| (0..VALUE_BOUND).contains(&v)),
            "{}x{}: value outside [0, {})",
            rows,
            cols,
            VALUE_BOUND
        );
    }
}

#[test]
fn test_values_cover_whole_range() {
    let grid = Grid::random(100, 100, DEFAULT_SEED).unwrap();
    for v in 0..VALUE_BOUND {
        assert!(grid.as_slice().contains(&v), "value {} never drawn", v);
    }
}

#[test]
fn test_same_seed_same_grid() {
    let a = Grid::random(50, 400, 1234).unwrap();
    let b = Grid::random(50, 400, 1234).unwrap();

    assert_eq!(a, b);
    assert_eq!(sum_stride_1(&a), sum_stride_1(&b));
    assert_eq!(sum_stride_n(&a), sum_stride_n(&b));
}

#[test]
fn test_different_seed_different_grid() {
    let a = Grid::random(50, 400, 1).unwrap();
    let b = Grid::random(50, 400, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_fill_random_matches_grid_random() {
    let cells = fill_random(9, 11, 99).unwrap();
    let grid = Grid::random(9, 11, 99).unwrap();
    assert_eq!(cells.as_slice(), grid.as_slice());
}

// ============================================================
// Stride-1 vs stride-N agreement
// ============================================================

#[test]
fn test_random_shapes_agree() {
    let shapes = [
        (2, 2),
        (3, 5),
        (7, 3),
        (13, 17),
        (200, 500),
        (500, 200),
        (64, 4_096),
    ];

    for (seed, (rows, cols)) in shapes.into_iter().enumerate() {
        let grid = Grid::random(rows, cols, seed as u64).unwrap();
        assert_sums_equal(&grid, &format!("{}x{}", rows, cols));
    }
}

#[test]
fn test_single_row() {
    let grid = Grid::random(1, 10_000, DEFAULT_SEED).unwrap();
    let sum = assert_sums_equal(&grid, "1xN");
    assert_eq!(sum, grid.row(0).iter().map(|&v| v as i64).sum::<i64>());
}

#[test]
fn test_single_column() {
    let grid = Grid::random(10_000, 1, DEFAULT_SEED).unwrap();
    let sum = assert_sums_equal(&grid, "Nx1");
    assert_eq!(sum, grid.as_slice().iter().map(|&v| v as i64).sum::<i64>());
}

#[test]
fn test_single_cell() {
    let grid = Grid::from_vec(1, 1, vec![8]).unwrap();
    assert_eq!(assert_sums_equal(&grid, "1x1"), 8);
}

#[test]
fn test_traversal_dispatch() {
    let grid = Grid::random(31, 47, 5).unwrap();
    assert_eq!(Traversal::Stride1.sum(&grid), sum_stride_1(&grid));
    assert_eq!(Traversal::StrideN.sum(&grid), sum_stride_n(&grid));
    assert_eq!(Traversal::Stride1.to_string(), "stride-1");
    assert_eq!(Traversal::StrideN.to_string(), "stride-N");
}

// ============================================================
// Timing
// ============================================================

#[test]
fn test_measure_keeps_sum() {
    let grid = Grid::random(20, 300, 3).unwrap();
    for t in Traversal::ALL {
        let m = measure(t, &grid);
        assert_eq!(m.traversal, t);
        assert_eq!(m.sum, t.sum(&grid));
    }
}

#[test]
fn test_repeated_measurement_is_stable() {
    let grid = Grid::random(20, 300, 3).unwrap();
    let once = measure(Traversal::StrideN, &grid);
    let many = measure_repeated(Traversal::StrideN, &grid, 5, true).unwrap();
    assert_eq!(once.sum, many.sum);
}

#[test]
fn test_zero_iterations_rejected() {
    let grid = Grid::random(2, 2, 3).unwrap();
    let err = measure_repeated(Traversal::Stride1, &grid, 0, false).unwrap_err();
    assert!(matches!(err, LocalityError::ZeroIterations));
}

// ============================================================
// Benchmark runner
// ============================================================

#[test]
fn test_default_config_is_reference_experiment() {
    let config = BenchConfig::default();
    assert_eq!((config.rows, config.cols), (ROWS, COLS));
    assert_eq!((ROWS, COLS), (200, 500_000));
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.iterations, 1);
    assert!(!config.warmup);
    assert!(!config.concurrent);
}

#[test]
fn test_run_sums_match() {
    let bench = LocalityBenchmark::new(small_config(100, 2_000)).unwrap();
    let report = bench.run().unwrap();

    assert!(report.sums_match());
    assert_eq!(report.stride_1.traversal, Traversal::Stride1);
    assert_eq!(report.stride_n.traversal, Traversal::StrideN);
    assert_eq!(report.stride_1.sum, sum_stride_1(bench.grid()));
}

#[test]
fn test_run_is_deterministic() {
    let a = LocalityBenchmark::new(small_config(40, 1_000)).unwrap().run().unwrap();
    let b = LocalityBenchmark::new(small_config(40, 1_000)).unwrap().run().unwrap();
    assert_eq!(a.stride_1.sum, b.stride_1.sum);
    assert_eq!(a.stride_n.sum, b.stride_n.sum);
}

#[test]
fn test_concurrent_matches_sequential() {
    let sequential = LocalityBenchmark::new(small_config(64, 4_096)).unwrap().run().unwrap();

    let config = BenchConfig {
        concurrent: true,
        iterations: 3,
        warmup: true,
        ..small_config(64, 4_096)
    };
    let concurrent = LocalityBenchmark::new(config).unwrap().run().unwrap();

    assert!(concurrent.sums_match());
    assert_eq!(sequential.stride_1.sum, concurrent.stride_1.sum);
}

#[test]
fn test_with_grid_adopts_shape() {
    let grid = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let bench = LocalityBenchmark::with_grid(BenchConfig::default(), grid).unwrap();

    assert_eq!((bench.config().rows, bench.config().cols), (2, 3));
    let report = bench.run().unwrap();
    assert_eq!(report.stride_1.sum, 21);
    assert_eq!(report.stride_n.sum, 21);
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn test_zero_dimension_rejected() {
    for (rows, cols) in [(0, 10), (10, 0), (0, 0)] {
        let err = Grid::random(rows, cols, DEFAULT_SEED).unwrap_err();
        assert!(
            matches!(err, LocalityError::EmptyDimension { .. }),
            "{}x{}: {:?}",
            rows,
            cols,
            err
        );
        assert!(LocalityBenchmark::new(small_config(rows, cols)).is_err());
    }
}

#[test]
fn test_overflowing_shape_rejected() {
    let err = Grid::random(usize::MAX, 2, DEFAULT_SEED).unwrap_err();
    assert!(matches!(err, LocalityError::TooLarge { .. }));
}

#[test]
fn test_huge_allocation_fails_cleanly() {
    // Cell count fits in usize, byte count doesn't fit in isize.
    let err = Grid::random(usize::MAX / 2, 1, DEFAULT_SEED).unwrap_err();
    assert!(matches!(err, LocalityError::Allocation { .. }), "{:?}", err);
}

#[test]
fn test_from_vec_validation() {
    let err = Grid::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
    assert!(matches!(
        err,
        LocalityError::ShapeMismatch {
            expected: 4,
            actual: 3
        }
    ));

    let err = Grid::from_vec(1, 3, vec![1, 10, 2]).unwrap_err();
    assert!(matches!(
        err,
        LocalityError::ValueOutOfRange {
            index: 1,
            value: 10,
            ..
        }
    ));

    assert!(Grid::from_vec(1, 2, vec![-1, 0]).is_err());
}

#[test]
fn test_zero_iterations_config_rejected() {
    let config = BenchConfig {
        iterations: 0,
        ..small_config(4, 4)
    };
    assert!(matches!(
        LocalityBenchmark::new(config).unwrap_err(),
        LocalityError::ZeroIterations
    ));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_out_of_bounds_panics() {
    let grid = Grid::from_vec(2, 2, vec![0; 4]).unwrap();
    grid.get(2, 0);
}

// ============================================================
// Full-size scenario (~400 MB, opt-in)
// ============================================================

#[test]
#[ignore = "allocates a 200 x 500000 grid"]
fn test_reference_scenario() {
    let bench = LocalityBenchmark::new(BenchConfig::default()).unwrap();
    let report = bench.run().unwrap();

    assert!(report.sums_match());
    let cells = (ROWS * COLS) as i64;
    assert!(report.stride_1.sum >= 0 && report.stride_1.sum <= 9 * cells);
}

#[test]
#[ignore = "timing-dependent; run with --release on a machine with caches"]
fn test_stride_1_not_slower() {
    let config = BenchConfig {
        iterations: 3,
        warmup: true,
        ..BenchConfig::default()
    };
    let report = LocalityBenchmark::new(config).unwrap().run().unwrap();
    assert!(
        report.stride_1.elapsed <= report.stride_n.elapsed,
        "stride-1 {:?} > stride-N {:?}",
        report.stride_1.elapsed,
        report.stride_n.elapsed
    );
}
