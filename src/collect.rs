//! Result-directory aggregation into a node calibration report
//!
//! Scans a benchmark result directory for up to four well-known log
//! locations, extracts one metric from each present file, and expresses
//! measured CPU (and optionally GPU) throughput as a speed ratio against a
//! supplied baseline. Missing or unparsable optional logs degrade to
//! absent report fields; a missing CPU metric is the one fatal case.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CalibrarError, Result};
use crate::extract::{parse_gflops, parse_stream_triad};

/// Primary CPU DGEMM log (optimized BLAS run)
pub const CPU_DGEMM_LOG: &str = "dgemm_openblas/dgemm.out";
/// Fallback CPU DGEMM log, consulted only when the primary yields no value
pub const CPU_FALLBACK_LOG: &str = "dgemm_numpy.out";
/// STREAM memory-bandwidth log
pub const STREAM_LOG: &str = "stream/stream.out";
/// GPU GEMM log
pub const GPU_GEMM_LOG: &str = "gpu_cublas/gpu_gemm.out";

/// Configuration for one aggregation run
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Benchmark result directory (`results/<node>_<ts>` layout)
    pub result_dir: PathBuf,
    /// Baseline CPU throughput the ratios are expressed against
    pub baseline_cpu_gflops: f64,
    /// Label identifying the baseline reference
    pub baseline_label: String,
}

impl CollectConfig {
    /// Create a configuration with the default baseline label
    #[must_use]
    pub fn new(result_dir: impl Into<PathBuf>, baseline_cpu_gflops: f64) -> Self {
        Self {
            result_dir: result_dir.into(),
            baseline_cpu_gflops,
            baseline_label: "baseline_cpu".to_string(),
        }
    }

    /// Set the baseline label
    #[must_use]
    pub fn with_baseline_label(mut self, label: impl Into<String>) -> Self {
        self.baseline_label = label.into();
        self
    }
}

/// Baseline reference the measured values are compared against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseline {
    /// Label identifying the baseline machine or configuration
    pub label: String,
    /// Baseline CPU throughput (GFLOP/s)
    pub cpu_gflops: f64,
}

/// Metrics extracted from the result directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measured {
    /// CPU DGEMM throughput (GFLOP/s); always present
    pub cpu_gflops: f64,
    /// GPU GEMM throughput (GFLOP/s), if a GPU log was found
    pub gpu_gflops: Option<f64>,
    /// STREAM Triad bandwidth (MB/s), if a STREAM log was found
    pub stream_triad_mbps: Option<f64>,
}

/// Speed ratios relative to the baseline, keyed by compute unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingSpeed {
    /// CPU speed ratio; the report's mandatory keystone value
    #[serde(rename = "CPU")]
    pub cpu: f64,
    /// GPU speed ratio, present only when a GPU metric was found
    #[serde(rename = "GPU", default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<f64>,
}

/// The aggregator's output: one node calibration report
///
/// Constructed once at the end of an aggregation run, serialized, then
/// discarded; no mutation after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationReport {
    /// Result directory the metrics were collected from
    pub result_dir: String,
    /// Baseline reference
    pub baseline: Baseline,
    /// Extracted metrics
    pub measured: Measured,
    /// Speed ratios, rounded to 4 decimal places
    pub processing_speed: ProcessingSpeed,
}

impl CalibrationReport {
    /// Serialize to pretty-printed JSON (2-space indentation)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalibrarError::SerializeError {
            reason: e.to_string(),
        })
    }

    /// Parse a report back from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or doesn't match the schema.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Round a ratio to 4 decimal places
///
/// Round-half-away-from-zero, the `f64::round` convention.
fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Read a log file if it exists; absence or unreadability is "no file"
fn read_log(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Aggregate a result directory into a calibration report
///
/// Lookup order and semantics (every lookup is "check existence, else
/// skip"): the optimized-BLAS DGEMM log is preferred; the fallback DGEMM
/// log is consulted only when the primary yielded no value; STREAM and GPU
/// logs are optional.
///
/// # Errors
///
/// Returns [`CalibrarError::MetricNotFound`] if no CPU metric could be
/// extracted from either candidate location — the CPU ratio is the
/// report's mandatory keystone value, so aggregation cannot proceed
/// without it.
pub fn collect(config: &CollectConfig) -> Result<CalibrationReport> {
    let root = &config.result_dir;

    let mut cpu_gflops = read_log(&root.join(CPU_DGEMM_LOG))
        .as_deref()
        .and_then(parse_gflops);
    if cpu_gflops.is_none() {
        cpu_gflops = read_log(&root.join(CPU_FALLBACK_LOG))
            .as_deref()
            .and_then(parse_gflops);
    }

    let stream_triad_mbps = read_log(&root.join(STREAM_LOG))
        .as_deref()
        .and_then(parse_stream_triad);

    let gpu_gflops = read_log(&root.join(GPU_GEMM_LOG))
        .as_deref()
        .and_then(parse_gflops);

    let cpu_gflops = cpu_gflops.ok_or_else(|| CalibrarError::MetricNotFound {
        what: "CPU GFLOP/s".to_string(),
        searched: format!("{CPU_DGEMM_LOG}, {CPU_FALLBACK_LOG}"),
    })?;

    let cpu_speed = round4(cpu_gflops / config.baseline_cpu_gflops);
    let gpu_speed = gpu_gflops.map(|g| round4(g / config.baseline_cpu_gflops));

    Ok(CalibrationReport {
        result_dir: root.display().to_string(),
        baseline: Baseline {
            label: config.baseline_label.clone(),
            cpu_gflops: config.baseline_cpu_gflops,
        },
        measured: Measured {
            cpu_gflops,
            gpu_gflops,
            stream_triad_mbps,
        },
        processing_speed: ProcessingSpeed {
            cpu: cpu_speed,
            gpu: gpu_speed,
        },
    })
}

/// Write a report as pretty-printed JSON, overwriting any existing file
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_report(report: &CalibrationReport, path: &Path) -> Result<()> {
    let json = report.to_json()?;
    fs::write(path, json).map_err(|e| CalibrarError::IoError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
