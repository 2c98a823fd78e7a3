//! Input parsing error types.

use thiserror::Error;

/// Errors that can occur while turning an input file into records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// One or more CSV rows could not be parsed.
    #[error("Failed to parse CSV: {}", .issues.join("; "))]
    Csv { issues: Vec<String> },

    /// The JSON text is malformed.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document is neither an array nor an object with an `issues` array.
    #[error("Unsupported JSON shape: expected an array of issues or an object with an \"issues\" array, found {found}")]
    UnsupportedShape { found: &'static str },

    /// An entry in the issue array is not an object.
    #[error("Issue at index {index} is not a JSON object")]
    NonObjectRecord { index: usize },

    /// The input format could not be determined.
    #[error("Unknown input format '{0}', expected 'csv' or 'json'")]
    UnknownFormat(String),
}
