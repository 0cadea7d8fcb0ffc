//! # Calibrar
//!
//! Node processing-speed calibration toolkit.
//!
//! Calibrar (Spanish: "to calibrate") measures how fast a node is relative
//! to a baseline machine. It ships two one-shot command-line tools:
//!
//! - `calibrar-dgemm` — a DGEMM micro-benchmark: times repeated dense
//!   `f64` matrix multiplies and reports achieved throughput in GFLOP/s as
//!   a single fixed-format text line.
//! - `calibrar-collect` — a result aggregator: scans a benchmark result
//!   directory (DGEMM, STREAM and GPU GEMM logs), extracts metrics by
//!   pattern matching, and writes a JSON calibration report with speed
//!   ratios relative to a supplied baseline.
//!
//! The two tools never call each other; they communicate only through the
//! filesystem convention of directory layout and line-based log formats.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use calibrar::bench::DgemmResult;
//! use calibrar::extract::parse_gflops;
//!
//! let result = DgemmResult::from_best(1000, Duration::from_secs(2));
//! let line = result.report_line();
//!
//! // The report line round-trips through the aggregator's extractor.
//! assert_eq!(parse_gflops(&line), Some(1.0));
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Clippy allows (MUST come after deny/warn to override them)
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)] // Not all methods need #[must_use]
#![allow(clippy::uninlined_format_args)] // Prefer explicit format args
#![allow(clippy::float_cmp)] // Allow float comparisons in tests

/// DGEMM micro-benchmark harness (clock abstraction, best-of-N timing)
pub mod bench;
/// CLI command implementations (extracted for testability)
pub mod cli;
/// Result-directory aggregation into a node calibration report
pub mod collect;
pub mod error;
/// Per-log-format text metric extractors
pub mod extract;
/// Square matrix type for the DGEMM micro-benchmark
pub mod matrix;

// Re-exports for convenience
pub use error::{CalibrarError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
