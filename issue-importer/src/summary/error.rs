//! Report writing error types.

use thiserror::Error;

/// Errors that can occur while writing run results to disk.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write a file.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the report.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
