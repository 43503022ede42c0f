//! Criterion benchmarks for the two traversal orders.
//!
//! Shapes keep the cell count fixed at 4M so only the stride changes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use locality::grid::Grid;
use locality::grid::init::DEFAULT_SEED;
use locality::{sum_stride_1, sum_stride_n};

const SHAPES: [(usize, usize); 4] = [(2_000, 2_000), (200, 20_000), (20, 200_000), (4, 1_000_000)];

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    group.sample_size(20);

    for (rows, cols) in SHAPES {
        let grid = match Grid::random(rows, cols, DEFAULT_SEED) {
            Ok(g) => g,
            Err(e) => panic!("{}x{}: {}", rows, cols, e),
        };
        let label = format!("{}x{}", rows, cols);
        group.throughput(Throughput::Elements(grid.len() as u64));

        group.bench_with_input(BenchmarkId::new("stride_1", &label), &grid, |b, g| {
            b.iter(|| sum_stride_1(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("stride_n", &label), &grid, |b, g| {
            b.iter(|| sum_stride_n(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_traversals);
criterion_main!(benches);
