//! Error types for calibrar

use thiserror::Error;

/// Result type alias using [`CalibrarError`]
pub type Result<T> = std::result::Result<T, CalibrarError>;

/// Errors produced by the calibration toolkit
///
/// Missing optional benchmark logs are never errors; they flow through the
/// aggregator as `None` metrics. Only the conditions below are fatal.
#[derive(Debug, Error)]
pub enum CalibrarError {
    /// I/O failure on a path the operation cannot proceed without
    #[error("I/O error on {path}: {reason}")]
    IoError {
        /// Path the operation failed on
        path: String,
        /// Underlying I/O failure description
        reason: String,
    },

    /// A mandatory metric could not be extracted from any candidate log
    #[error("could not extract {what} from {searched}")]
    MetricNotFound {
        /// Human-readable name of the metric
        what: String,
        /// Candidate locations that were searched
        searched: String,
    },

    /// Report serialization failure
    #[error("failed to serialize report: {reason}")]
    SerializeError {
        /// Underlying serialization failure description
        reason: String,
    },
}
