//! Import summary types.

use super::outcome::ImportOutcome;
use serde::Serialize;

/// Summary of a complete import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Number of created (or, in a dry run, simulated) issues.
    pub successful: usize,

    /// Number of records that were rejected or failed to create.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl ImportSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Builds a summary from a list of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[ImportOutcome], dry_run: bool) -> Self {
        let mut summary = Self::new(dry_run);
        for outcome in outcomes {
            summary.record_outcome(outcome);
        }
        summary
    }

    /// Updates the summary with a single outcome.
    pub fn record_outcome(&mut self, outcome: &ImportOutcome) {
        if outcome.is_success() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Total number of records processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }

    /// One-line, human-readable summary.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Import completed: {} successful, {} failed",
            self.successful, self.failed
        )
    }

    /// Returns true if any record failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns true if the run as a whole should be reported as failed.
    ///
    /// A dry run never fails, regardless of how many records were rejected.
    #[must_use]
    pub fn run_failed(&self) -> bool {
        self.has_failures() && !self.dry_run
    }
}
