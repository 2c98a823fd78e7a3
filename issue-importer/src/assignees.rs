//! Assignee validation against repository collaborators.

use crate::github::{ApiError, IssueTracker};
use tracing::{debug, warn};

/// Keeps only the candidates that are collaborators on the repository.
///
/// Each candidate costs one request, made sequentially. Users who are not
/// collaborators, and users whose check fails for any other reason, are
/// dropped with a warning. Order of the remaining users is preserved.
pub async fn validate_assignees(
    tracker: &dyn IssueTracker,
    candidates: Vec<String>,
) -> Vec<String> {
    if candidates.is_empty() {
        return candidates;
    }

    let mut valid = Vec::with_capacity(candidates.len());
    for username in candidates {
        match tracker.check_collaborator(&username).await {
            Ok(()) => {
                debug!(assignee = %username, "Assignee is a collaborator");
                valid.push(username);
            }
            Err(ApiError::NotFound { .. }) => {
                warn!(assignee = %username, "User is not a collaborator, skipping assignee");
            }
            Err(e) => {
                warn!(assignee = %username, error = %e, "Failed to check assignee, skipping");
            }
        }
    }

    valid
}
