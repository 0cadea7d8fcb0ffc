//! `calibrar-collect` — benchmark-log aggregation entry point

use std::path::PathBuf;

use clap::Parser;

/// Aggregate benchmark logs into a node calibration report
///
/// Scans a result directory for DGEMM, STREAM and GPU GEMM logs, extracts
/// their metrics, computes speed ratios against the supplied baseline and
/// writes a JSON report. Fails if no CPU metric can be extracted.
#[derive(Parser)]
#[command(name = "calibrar-collect", version, about, long_about = None)]
struct Args {
    /// Benchmark result directory (results/<node>_<ts> layout)
    #[arg(long)]
    result_dir: PathBuf,

    /// Baseline CPU throughput in GFLOP/s
    #[arg(long)]
    baseline_cpu_gflops: f64,

    /// Label identifying the baseline reference
    #[arg(long, default_value = "baseline_cpu")]
    baseline_label: String,

    /// Output path for the JSON calibration report
    #[arg(short, long, default_value = "node_calibration.json")]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = calibrar::cli::run_collect(
        &args.result_dir,
        args.baseline_cpu_gflops,
        &args.baseline_label,
        &args.output,
    ) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
