//! Access to the remote issue tracker.
//!
//! The importer only needs a handful of GitHub operations, so they sit behind
//! the [`IssueTracker`] trait. [`OctocrabTracker`] is the production
//! implementation.

mod error;
#[cfg(test)]
pub(crate) mod fake;
mod octocrab_tracker;
mod types;

pub use error::{ApiError, FieldError};
pub use octocrab_tracker::OctocrabTracker;
pub use types::{CreatedIssue, IssuePayload, Milestone, RepositoryRef};

use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;

/// Remote operations required to import issues into one repository.
///
/// Every call is a single blocking round-trip from the importer's point of
/// view; callers never issue two requests at once.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists every milestone of the repository, open and closed.
    async fn list_milestones(&self) -> Result<Vec<Milestone>, ApiError>;

    /// Checks whether `username` is a collaborator on the repository.
    ///
    /// Returns [`ApiError::NotFound`] when the user is not a collaborator.
    async fn check_collaborator(&self, username: &str) -> Result<(), ApiError>;

    /// Creates an issue.
    async fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue, ApiError>;

    /// Returns the current core API rate limit, if the tracker exposes one.
    async fn core_rate_limit(&self) -> Result<Option<RateLimitInfo>, ApiError> {
        Ok(None)
    }
}
