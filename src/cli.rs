//! CLI command implementations (extracted for testability)
//!
//! The `src/bin/` entry points only parse flags and dispatch here, so
//! tests can drive the commands without spawning processes.

use std::path::Path;

use crate::bench::{self, DgemmConfig};
use crate::collect::{collect, write_report, CollectConfig};
use crate::error::Result;

/// Run the DGEMM micro-benchmark and print its single report line
pub fn run_dgemm(n: usize, reps: usize) {
    let result = bench::run(&DgemmConfig { n, reps });
    println!("{}", result.report_line());
}

/// Aggregate a result directory and write the calibration report
///
/// Prints a success acknowledgment including the output path.
///
/// # Errors
///
/// Returns an error if no CPU metric could be extracted or the report
/// cannot be written; no partial report is left behind in the former case.
pub fn run_collect(
    result_dir: &Path,
    baseline_cpu_gflops: f64,
    baseline_label: &str,
    output: &Path,
) -> Result<()> {
    let config =
        CollectConfig::new(result_dir, baseline_cpu_gflops).with_baseline_label(baseline_label);
    let report = collect(&config)?;
    write_report(&report, output)?;
    println!("✓ wrote {}", output.display());
    Ok(())
}
