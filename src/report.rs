//! Human-readable output. Nothing here is a programmatic contract.

use std::io::{self, Write};

use crate::runner::BenchReport;
use crate::timing::Measurement;

/// `sum equal <sum>, cost <ms> ms.`
pub fn format_measurement(m: &Measurement) -> String {
    format!("sum equal {}, cost {} ms.", m.sum, m.elapsed_ms())
}

/// Write one line per pass, stride-1 first.
pub fn write_report<W: Write>(out: &mut W, report: &BenchReport) -> io::Result<()> {
    for m in report.measurements() {
        writeln!(out, "{}", format_measurement(&m))?;
    }
    Ok(())
}

pub fn print_report(report: &BenchReport) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), report)
}

/// Comparison table with fractional timings and the stride-N slowdown.
pub fn write_summary<W: Write>(
    out: &mut W,
    rows: usize,
    cols: usize,
    report: &BenchReport,
) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "SUMMARY  {}×{} grid", rows, cols)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "{:<12} {:>16} {:>14}", "Order", "Sum", "Time")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for m in report.measurements() {
        writeln!(
            out,
            "{:<12} {:>16} {:>11.2} ms",
            m.traversal.name(),
            m.sum,
            m.elapsed_ms_f64()
        )?;
    }

    writeln!(out, "{}", "-".repeat(60))?;
    match report.slowdown() {
        Some(x) => writeln!(out, "stride-N / stride-1: {:.1}×", x)?,
        None => writeln!(out, "stride-N / stride-1: n/a (stride-1 too fast to time)")?,
    }
    let verdict = if report.sums_match() { "match" } else { "MISMATCH" };
    writeln!(out, "sums: {}", verdict)?;
    writeln!(out, "{}", "=".repeat(60))
}

pub fn print_summary(rows: usize, cols: usize, report: &BenchReport) -> io::Result<()> {
    write_summary(&mut io::stdout().lock(), rows, cols, report)
}
