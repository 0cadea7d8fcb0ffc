//! `calibrar-dgemm` — DGEMM micro-benchmark entry point

use clap::Parser;

/// Time repeated dense matrix multiplies and report GFLOP/s
///
/// Allocates two n×n f64 matrices, runs one untimed warm-up multiply,
/// then times `reps` multiplies with a monotonic clock and reports the
/// throughput of the best repetition as a single line:
///
///   DGEMM n=<n> best_s=<seconds> GFLOP/s=<value>
#[derive(Parser)]
#[command(name = "calibrar-dgemm", version, about, long_about = None)]
struct Args {
    /// Matrix dimension (matrices are n×n, f64)
    #[arg(long, default_value = "1024")]
    n: usize,

    /// Number of timed repetitions; the minimum elapsed time wins
    #[arg(long, default_value = "5")]
    reps: usize,
}

fn main() {
    let args = Args::parse();
    calibrar::cli::run_dgemm(args.n, args.reps);
}
