//! Issue validation and creation.
//!
//! A [`RawRecord`] is first turned into a [`NormalizedIssue`] by
//! [`validate_record`], then handed to [`create_issue`], which either creates
//! it on GitHub or simulates the creation in dry-run mode.

mod error;
mod normalized_issue;

pub use error::ValidationError;
pub use normalized_issue::NormalizedIssue;

use crate::assignees::validate_assignees;
use crate::github::{IssuePayload, IssueTracker};
use crate::milestones::{resolve_milestone, MilestoneMap};
use crate::normalize::{normalize_assignees, normalize_labels};
use crate::records::RawRecord;
use crate::summary::ImportOutcome;
use tracing::{debug, error, info, info_span, Instrument};

/// Validates and normalizes one raw record.
///
/// Only the title is mandatory. It is checked before any request is made, so
/// a record without a title never costs an API call. Assignees and milestone
/// degrade to fewer or no values instead of rejecting the record.
///
/// # Arguments
///
/// * `tracker` - Issue tracker used to check assignees
/// * `record` - Raw record to validate
/// * `index` - Zero-based position of the record in the input
/// * `milestones` - Milestone titles of the target repository
///
/// # Errors
///
/// Returns [`ValidationError::MissingTitle`] if the title is missing, not a
/// string, or blank.
pub async fn validate_record(
    tracker: &dyn IssueTracker,
    record: &RawRecord,
    index: usize,
    milestones: &MilestoneMap,
) -> Result<NormalizedIssue, ValidationError> {
    let title = record
        .get_str("title")
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .ok_or(ValidationError::MissingTitle { index })?
        .to_string();

    let body = record
        .get_str("body")
        .or_else(|| record.get_str("description"))
        .unwrap_or_default()
        .to_string();

    let labels = normalize_labels(record.get("labels"));
    let assignees =
        validate_assignees(tracker, normalize_assignees(record.get("assignees"))).await;
    let milestone = resolve_milestone(record.get("milestone"), milestones);

    debug!(
        title = %title,
        labels = labels.len(),
        assignees = assignees.len(),
        milestone = ?milestone,
        "Record validated"
    );

    Ok(NormalizedIssue {
        title,
        body,
        labels,
        assignees,
        milestone,
    })
}

/// Creates a normalized issue, or simulates it in dry-run mode.
///
/// Remote failures never escape this function: they are reported as
/// [`ImportOutcome::Failed`]. Field-level validation errors from GitHub are
/// folded into a single readable message.
///
/// # Arguments
///
/// * `tracker` - Issue tracker to create the issue in
/// * `issue` - Issue to create
/// * `dry_run` - When set, no request is made
pub async fn create_issue(
    tracker: &dyn IssueTracker,
    issue: &NormalizedIssue,
    dry_run: bool,
) -> ImportOutcome {
    let span = info_span!("create_issue", title = %issue.title);

    async {
        if dry_run {
            info!(
                labels = ?issue.labels,
                assignees = ?issue.assignees,
                milestone = ?issue.milestone,
                "[DRY RUN] Would create issue"
            );
            return ImportOutcome::DryRun {
                title: issue.title.clone(),
            };
        }

        let payload = IssuePayload::from(issue);
        match tracker.create_issue(&payload).await {
            Ok(created) => {
                info!(
                    issue_number = created.number,
                    url = %created.html_url,
                    "Issue created successfully"
                );
                ImportOutcome::Created {
                    title: issue.title.clone(),
                    number: created.number,
                    url: created.html_url,
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to create issue");
                if let Some(url) = e.documentation_url() {
                    info!(documentation_url = %url, "See GitHub documentation for details");
                }
                ImportOutcome::Failed {
                    title: issue.title.clone(),
                    error: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{Call, FakeTracker};
    use crate::github::{ApiError, FieldError};
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        match value {
            serde_json::Value::Object(fields) => RawRecord::new(fields),
            other => panic!("expected object, got {other}"),
        }
    }

    fn issue(title: &str) -> NormalizedIssue {
        NormalizedIssue {
            title: title.to_string(),
            body: String::new(),
            labels: Vec::new(),
            assignees: Vec::new(),
            milestone: None,
        }
    }

    #[tokio::test]
    async fn missing_or_blank_title_is_rejected_without_requests() {
        let tracker = FakeTracker::new().with_collaborators(&["alice"]);
        let milestones = MilestoneMap::new();

        for (index, raw) in [
            json!({ "assignees": "alice", "milestone": "v1" }),
            json!({ "title": "   ", "assignees": "alice" }),
            json!({ "title": 42, "assignees": ["alice"] }),
            json!({ "title": null }),
        ]
        .into_iter()
        .enumerate()
        {
            let result = validate_record(&tracker, &record(raw), index, &milestones).await;
            assert_eq!(result, Err(ValidationError::MissingTitle { index }));
        }

        assert!(tracker.calls().is_empty());
    }

    #[tokio::test]
    async fn normalizes_all_fields() {
        let tracker = FakeTracker::new().with_collaborators(&["alice"]);
        let milestones: MilestoneMap = [("Sprint 1", 3_u64)].into_iter().collect();
        let raw = record(json!({
            "title": "  Crash on start  ",
            "body": "Steps to reproduce",
            "labels": "bug; ui",
            "assignees": "alice, bob",
            "milestone": "Sprint 1"
        }));

        let issue = validate_record(&tracker, &raw, 0, &milestones).await.unwrap();

        assert_eq!(
            issue,
            NormalizedIssue {
                title: "Crash on start".to_string(),
                body: "Steps to reproduce".to_string(),
                labels: vec!["bug".to_string(), "ui".to_string()],
                assignees: vec!["alice".to_string()],
                milestone: Some(3),
            }
        );
    }

    #[tokio::test]
    async fn body_falls_back_to_description() {
        let tracker = FakeTracker::new();
        let milestones = MilestoneMap::new();

        let described = record(json!({ "title": "T", "description": "from description" }));
        let issue = validate_record(&tracker, &described, 0, &milestones).await.unwrap();
        assert_eq!(issue.body, "from description");

        let both = record(json!({ "title": "T", "body": "from body", "description": "x" }));
        let issue = validate_record(&tracker, &both, 0, &milestones).await.unwrap();
        assert_eq!(issue.body, "from body");

        let neither = record(json!({ "title": "T" }));
        let issue = validate_record(&tracker, &neither, 0, &milestones).await.unwrap();
        assert_eq!(issue.body, "");
        assert!(issue.labels.is_empty());
        assert!(issue.assignees.is_empty());
        assert_eq!(issue.milestone, None);
    }

    #[tokio::test]
    async fn unresolved_milestone_does_not_reject_record() {
        let tracker = FakeTracker::new();
        let raw = record(json!({ "title": "T", "milestone": "Backlog" }));

        let issue = validate_record(&tracker, &raw, 0, &MilestoneMap::new())
            .await
            .unwrap();

        assert_eq!(issue.milestone, None);
    }

    #[tokio::test]
    async fn dry_run_never_calls_create() {
        let tracker = FakeTracker::new();

        let outcome = create_issue(&tracker, &issue("Preview me"), true).await;

        assert_eq!(
            outcome,
            ImportOutcome::DryRun {
                title: "Preview me".to_string()
            }
        );
        assert!(tracker.calls().is_empty());
    }

    #[tokio::test]
    async fn live_run_creates_issue() {
        let tracker = FakeTracker::new();
        let mut issue = issue("Ship it");
        issue.labels = vec!["release".to_string()];

        let outcome = create_issue(&tracker, &issue, false).await;

        assert_eq!(
            outcome,
            ImportOutcome::Created {
                title: "Ship it".to_string(),
                number: 1,
                url: "https://github.com/octo-org/octo-repo/issues/1".to_string(),
            }
        );
        assert_eq!(
            tracker.calls(),
            vec![Call::CreateIssue(IssuePayload::from(&issue))]
        );
    }

    #[tokio::test]
    async fn validation_failure_is_reported_readably() {
        let tracker = FakeTracker::new().failing_creation(ApiError::Validation {
            errors: vec![FieldError {
                resource: Some("Issue".to_string()),
                field: Some("labels".to_string()),
                code: Some("invalid".to_string()),
                message: None,
            }],
            documentation_url: Some("https://docs.github.com/rest/issues".to_string()),
        });

        let outcome = create_issue(&tracker, &issue("Bad labels"), false).await;

        assert_eq!(
            outcome,
            ImportOutcome::Failed {
                title: "Bad labels".to_string(),
                error: "Validation Failed: labels invalid".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn other_failures_keep_raw_message() {
        let tracker = FakeTracker::new().failing_creation(ApiError::Remote {
            status: Some(401),
            message: "Bad credentials".to_string(),
            documentation_url: Some("https://docs.github.com/rest".to_string()),
        });

        let outcome = create_issue(&tracker, &issue("Any"), false).await;

        assert_eq!(
            outcome,
            ImportOutcome::Failed {
                title: "Any".to_string(),
                error: "Bad credentials".to_string(),
            }
        );
    }
}
