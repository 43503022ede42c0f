//! Benchmark runner: stride-1 vs stride-N summation.

use std::process;

use clap::Parser;
use locality::grid::init::DEFAULT_SEED;
use locality::grid::{COLS, ROWS};
use locality::logging::init_logging;
use locality::report::{print_report, print_summary};
use locality::{BenchConfig, LocalityBenchmark, LocalityError};
use tracing::error;

#[derive(Parser)]
#[command(name = "locality")]
#[command(about = "Time row-major vs column-major summation of a large grid")]
#[command(version)]
struct Cli {
    /// Grid rows
    #[arg(long, default_value_t = ROWS)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = COLS)]
    cols: usize,

    /// Random seed for the grid contents
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Timed runs per pass (elapsed time is averaged)
    #[arg(short, long, default_value_t = 1)]
    iterations: usize,

    /// Run each pass once untimed before measuring
    #[arg(long)]
    warmup: bool,

    /// Run both passes at the same time on two threads
    #[arg(long)]
    concurrent: bool,

    /// Print a comparison table after the results
    #[arg(long)]
    summary: bool,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl From<&Cli> for BenchConfig {
    fn from(cli: &Cli) -> Self {
        BenchConfig {
            rows: cli.rows,
            cols: cli.cols,
            seed: cli.seed,
            iterations: cli.iterations,
            warmup: cli.warmup,
            concurrent: cli.concurrent,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            error!(error = %e, "benchmark aborted");
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns whether the two sums agreed.
fn run(cli: &Cli) -> Result<bool, LocalityError> {
    let bench = LocalityBenchmark::new(BenchConfig::from(cli))?;
    let report = bench.run()?;

    if let Err(e) = print_report(&report) {
        error!(error = %e, "failed to write report");
    }
    if cli.summary {
        if let Err(e) = print_summary(cli.rows, cli.cols, &report) {
            error!(error = %e, "failed to write summary");
        }
    }

    Ok(report.sums_match())
}
