//! In-memory [`IssueTracker`] that records every call.

use super::{ApiError, CreatedIssue, IssuePayload, IssueTracker, Milestone};
use crate::rate_limit::RateLimitInfo;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListMilestones,
    CheckCollaborator(String),
    CreateIssue(IssuePayload),
    RateLimit,
}

#[derive(Default)]
pub(crate) struct FakeTracker {
    milestones: Vec<Milestone>,
    milestone_error: Option<ApiError>,
    collaborators: HashSet<String>,
    unreachable: HashMap<String, ApiError>,
    create_error: Option<ApiError>,
    rate_limit: Option<RateLimitInfo>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_milestone(mut self, number: u64, title: &str) -> Self {
        self.milestones.push(Milestone {
            number,
            title: title.to_string(),
            state: "open".to_string(),
        });
        self
    }

    pub(crate) fn failing_milestones(mut self, error: ApiError) -> Self {
        self.milestone_error = Some(error);
        self
    }

    pub(crate) fn with_collaborators(mut self, usernames: &[&str]) -> Self {
        self.collaborators
            .extend(usernames.iter().map(|name| name.to_string()));
        self
    }

    pub(crate) fn with_unreachable_user(mut self, username: &str, error: ApiError) -> Self {
        self.unreachable.insert(username.to_string(), error);
        self
    }

    pub(crate) fn failing_creation(mut self, error: ApiError) -> Self {
        self.create_error = Some(error);
        self
    }

    pub(crate) fn with_rate_limit(mut self, info: RateLimitInfo) -> Self {
        self.rate_limit = Some(info);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn created(&self) -> Vec<IssuePayload> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateIssue(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn list_milestones(&self) -> Result<Vec<Milestone>, ApiError> {
        self.record(Call::ListMilestones);
        match &self.milestone_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.milestones.clone()),
        }
    }

    async fn check_collaborator(&self, username: &str) -> Result<(), ApiError> {
        self.record(Call::CheckCollaborator(username.to_string()));
        if let Some(error) = self.unreachable.get(username) {
            return Err(error.clone());
        }
        if self.collaborators.contains(username) {
            Ok(())
        } else {
            Err(ApiError::NotFound {
                message: format!("{username} is not a collaborator"),
            })
        }
    }

    async fn create_issue(&self, payload: &IssuePayload) -> Result<CreatedIssue, ApiError> {
        self.record(Call::CreateIssue(payload.clone()));
        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }
        let number = self.created().len() as u64;
        Ok(CreatedIssue {
            number,
            html_url: format!("https://github.com/octo-org/octo-repo/issues/{number}"),
        })
    }

    async fn core_rate_limit(&self) -> Result<Option<RateLimitInfo>, ApiError> {
        self.record(Call::RateLimit);
        Ok(self.rate_limit.clone())
    }
}
