//! [`IssueTracker`] backed by the GitHub REST API through octocrab.

use super::{ApiError, CreatedIssue, IssuePayload, IssueTracker, Milestone, RepositoryRef};
use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Query parameters for listing milestones.
#[derive(Serialize)]
struct MilestoneQuery {
    state: &'static str,
    per_page: u8,
}

/// GitHub issue tracker for a single repository.
#[derive(Clone)]
pub struct OctocrabTracker {
    octocrab: Octocrab,
    repository: RepositoryRef,
}

impl OctocrabTracker {
    /// Creates a tracker for `repository` using an authenticated client.
    pub fn new(octocrab: Octocrab, repository: RepositoryRef) -> Self {
        Self {
            octocrab,
            repository,
        }
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    fn route(&self, path: &str) -> String {
        format!(
            "/repos/{}/{}/{path}",
            self.repository.owner, self.repository.name
        )
    }

    /// Route for a single collaborator, with the username percent-encoded as
    /// one path segment. `None` for names that cannot name a user.
    fn collaborator_route(&self, username: &str) -> Option<String> {
        if matches!(username, "" | "." | "..") {
            return None;
        }

        let mut url = Url::parse("http://localhost/").ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(username);
        Some(self.route(&format!("collaborators{}", url.path())))
    }
}

#[async_trait]
impl IssueTracker for OctocrabTracker {
    async fn list_milestones(&self) -> Result<Vec<Milestone>, ApiError> {
        let query = MilestoneQuery {
            state: "all",
            per_page: 100,
        };
        let first_page: Page<Milestone> = self
            .octocrab
            .get(self.route("milestones"), Some(&query))
            .await?;
        let milestones = self.octocrab.all_pages(first_page).await?;

        debug!(count = milestones.len(), "Listed milestones");
        Ok(milestones)
    }

    async fn check_collaborator(&self, username: &str) -> Result<(), ApiError> {
        let Some(route) = self.collaborator_route(username) else {
            return Err(ApiError::NotFound {
                message: format!("{username:?} is not a valid GitHub username"),
            });
        };
        let response = self.octocrab._get(route).await?;
        let status = response.status().as_u16();

        match status {
            200..=299 => Ok(()),
            404 => Err(ApiError::NotFound {
                message: format!("{username} is not a collaborator on {}", self.repository),
            }),
            _ => Err(ApiError::Remote {
                status: Some(status),
                message: format!("Collaborator check for {username} returned HTTP {status}"),
                documentation_url: None,
            }),
        }
    }

    async fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue, ApiError> {
        let issue: CreatedIssue = self
            .octocrab
            .post(self.route("issues"), Some(payload))
            .await?;
        Ok(issue)
    }

    async fn core_rate_limit(&self) -> Result<Option<RateLimitInfo>, ApiError> {
        let rate_limit = self.octocrab.ratelimit().get().await?;
        let core = &rate_limit.resources.core;

        Ok(Some(RateLimitInfo {
            remaining: core.remaining as u32,
            reset: core.reset,
            limit: core.limit as u32,
        }))
    }
}
