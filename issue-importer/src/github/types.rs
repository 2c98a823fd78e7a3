//! Request and response types exchanged with GitHub.

use crate::config::ConfigError;
use crate::issues::NormalizedIssue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A target repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl FromStr for RepositoryRef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidRepository {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A milestone as listed by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    /// Milestone number, as referenced when creating issues.
    pub number: u64,

    /// Milestone title.
    pub title: String,

    /// `open` or `closed`.
    #[serde(default)]
    pub state: String,
}

/// Body of an issue creation request.
///
/// Empty collections and a missing milestone are left out entirely rather
/// than sent as empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

impl From<&NormalizedIssue> for IssuePayload {
    fn from(issue: &NormalizedIssue) -> Self {
        Self {
            title: issue.title.clone(),
            body: issue.body.clone(),
            labels: issue.labels.clone(),
            assignees: issue.assignees.clone(),
            milestone: issue.milestone,
        }
    }
}

/// The parts of a created issue the importer reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    /// Issue number assigned by GitHub.
    pub number: u64,

    /// Browser URL of the issue.
    pub html_url: String,
}
