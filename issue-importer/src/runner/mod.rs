//! Orchestrates an import run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::ConfigError;
use crate::github::{IssueTracker, OctocrabTracker};
use crate::issues::{create_issue, validate_record};
use crate::milestones::{fetch_milestone_map, MilestoneMap};
use crate::rate_limit::Pacer;
use crate::records::{parse_records, RawRecord};
use crate::summary::{ImportOutcome, ImportReport};
use octocrab::Octocrab;
use tracing::{info, info_span, warn, Instrument};

/// Title reported for rejected records that have no readable title.
pub const UNTITLED_PLACEHOLDER: &str = "<untitled>";

/// Runs a complete import: read, parse, resolve milestones, import.
pub struct Runner {
    config: RunnerConfig,
    tracker: Box<dyn IssueTracker>,
}

impl Runner {
    /// Builds a runner that talks to GitHub.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut builder = Octocrab::builder().personal_token(config.token().to_string());
        if let Some(api_url) = config.api_url() {
            builder = builder.base_uri(api_url.as_str())?;
        }
        let octocrab = builder.build()?;
        let tracker = OctocrabTracker::new(octocrab, config.repository().clone());
        Ok(Self::with_tracker(config, Box::new(tracker)))
    }

    /// Builds a runner around an existing tracker.
    pub fn with_tracker(config: RunnerConfig, tracker: Box<dyn IssueTracker>) -> Self {
        Self { config, tracker }
    }

    /// Executes the full import flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the input cannot be read or parsed. Once
    /// records are being imported, failures are reported per record instead.
    pub async fn run(&self) -> Result<ImportReport, RunnerError> {
        let path = self.config.input_path();
        let format = self
            .config
            .format()
            .ok_or(ConfigError::MissingSetting { name: "format" })?;

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            }
            .into());
        }

        info!(
            path = %path.display(),
            format = %format,
            repository = %self.config.repository(),
            dry_run = self.config.dry_run(),
            "Reading issues"
        );
        let content = std::fs::read_to_string(path).map_err(|e| RunnerError::Input {
            path: path.display().to_string(),
            source: e,
        })?;
        let records = parse_records(&content, format)?;

        if records.is_empty() {
            warn!("No issues found in input file");
            return Ok(ImportReport::new(Vec::new(), self.config.dry_run()));
        }

        info!(count = records.len(), "Found issues to import");
        let milestones = fetch_milestone_map(self.tracker.as_ref()).await;

        Ok(import_records(
            self.tracker.as_ref(),
            &records,
            &milestones,
            self.config.dry_run(),
            self.config.pacer(),
        )
        .await)
    }
}

/// Imports records one at a time, in order.
///
/// Each record is validated and then created (or simulated). A rejected
/// record becomes a [`ImportOutcome::Failed`] and the batch continues. After
/// every live creation attempt except the last record's, `pacer` pauses
/// before the next request.
pub async fn import_records(
    tracker: &dyn IssueTracker,
    records: &[RawRecord],
    milestones: &MilestoneMap,
    dry_run: bool,
    pacer: &Pacer,
) -> ImportReport {
    let total = records.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, record) in records.iter().enumerate() {
        let span = info_span!("record", position = index + 1, total);
        let is_last = index + 1 == total;

        let outcome = async {
            match validate_record(tracker, record, index, milestones).await {
                Ok(issue) => {
                    let outcome = create_issue(tracker, &issue, dry_run).await;
                    if !dry_run && !is_last {
                        pacer.pause(tracker).await;
                    }
                    outcome
                }
                Err(e) => {
                    warn!(error = %e, "Skipping invalid record");
                    ImportOutcome::Failed {
                        title: record
                            .title_hint()
                            .unwrap_or_else(|| UNTITLED_PLACEHOLDER.to_string()),
                        error: e.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await;

        outcomes.push(outcome);
    }

    let report = ImportReport::new(outcomes, dry_run);
    info!(
        successful = report.summary.successful,
        failed = report.summary.failed,
        "{}",
        report.summary.message()
    );
    report
}
