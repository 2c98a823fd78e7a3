//! Validated, creation-ready issues.

use serde::Serialize;

/// An issue that passed validation and is ready to be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedIssue {
    /// Trimmed, non-empty title.
    pub title: String,

    /// Issue body (empty when the record has none).
    pub body: String,

    /// Label names, in input order.
    pub labels: Vec<String>,

    /// Usernames confirmed as collaborators.
    pub assignees: Vec<String>,

    /// Resolved milestone number.
    pub milestone: Option<u64>,
}
