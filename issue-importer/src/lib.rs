#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod assignees;
pub mod config;
pub mod github;
#[cfg(test)]
pub(crate) mod log_capture;
pub mod issues;
pub mod milestones;
pub mod normalize;
pub mod rate_limit;
pub mod records;
pub mod runner;
pub mod summary;

pub use assignees::validate_assignees;
pub use config::{load_settings, parse_api_url, ConfigError, ImporterSettings};
pub use github::{
    ApiError, CreatedIssue, FieldError, IssuePayload, IssueTracker, Milestone, OctocrabTracker,
    RepositoryRef,
};
pub use issues::{create_issue, validate_record, NormalizedIssue, ValidationError};
pub use milestones::{fetch_milestone_map, resolve_milestone, MilestoneMap};
pub use normalize::{normalize_assignees, normalize_labels};
pub use rate_limit::{wait_if_needed, Pacer, RateLimitInfo, DEFAULT_REQUEST_DELAY};
pub use records::{parse_records, InputFormat, ParseError, RawRecord};
pub use runner::{import_records, Runner, RunnerConfig, RunnerError, UNTITLED_PLACEHOLDER};
pub use summary::{ImportOutcome, ImportReport, ImportSummary, ReportError};
