//! Runner error types.

use thiserror::Error;

/// Errors that stop a run before any record is imported.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The input file is not structurally valid.
    #[error(transparent)]
    Parse(#[from] crate::records::ParseError),

    /// Failed to read the input file.
    #[error("Failed to read input file '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}
