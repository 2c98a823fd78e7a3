//! Record validation error types.

use thiserror::Error;

/// Errors that make a single record unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The record has no usable title.
    #[error("Record #{} is missing a title (a non-empty string is required)", .index + 1)]
    MissingTitle { index: usize },
}

impl ValidationError {
    /// Zero-based position of the offending record in the input.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::MissingTitle { index } => *index,
        }
    }
}
