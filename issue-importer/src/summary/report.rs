//! Final report of an import run.

use super::{ImportOutcome, ImportSummary, ReportError};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Outcomes of every processed record, in input order, plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// One outcome per input record.
    pub outcomes: Vec<ImportOutcome>,

    /// Aggregated counts.
    pub summary: ImportSummary,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    message: String,
    summary: &'a ImportSummary,
    outcomes: &'a [ImportOutcome],
}

impl ImportReport {
    /// Builds a report from outcomes collected during a run.
    #[must_use]
    pub fn new(outcomes: Vec<ImportOutcome>, dry_run: bool) -> Self {
        let summary = ImportSummary::from_outcomes(&outcomes, dry_run);
        Self { outcomes, summary }
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let document = ReportDocument {
            message: self.summary.message(),
            summary: &self.summary,
            outcomes: &self.outcomes,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Writes the JSON report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if serialization or the write fails.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| ReportError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        info!(path = %path.display(), "Wrote import report");
        Ok(())
    }

    /// Appends GitHub Actions step outputs (`issues-created`, `issues-failed`,
    /// `summary`) to the file named by `GITHUB_OUTPUT`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::IoError`] if the file cannot be written.
    pub fn write_github_outputs(&self, path: &Path) -> Result<(), ReportError> {
        let io_error = |e: std::io::Error| ReportError::IoError {
            path: path.display().to_string(),
            source: e,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_error)?;

        write!(
            file,
            "issues-created={}\nissues-failed={}\nsummary={}\n",
            self.summary.successful,
            self.summary.failed,
            self.summary.message()
        )
        .map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> ImportReport {
        ImportReport::new(
            vec![
                ImportOutcome::Created {
                    title: "A".to_string(),
                    number: 1,
                    url: "https://example.com/1".to_string(),
                },
                ImportOutcome::Failed {
                    title: "<untitled>".to_string(),
                    error: "Record #2 is missing a title".to_string(),
                },
            ],
            false,
        )
    }

    #[test]
    fn appends_github_outputs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        sample().write_github_outputs(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing=1\nissues-created=1\nissues-failed=1\nsummary=Import completed: 1 successful, 1 failed\n"
        );
    }

    #[test]
    fn writes_json_report() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.json");

        sample().write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["message"], "Import completed: 1 successful, 1 failed");
        assert_eq!(written["summary"]["failed"], 1);
        assert_eq!(written["outcomes"][0]["status"], "created");
        assert_eq!(written["outcomes"][1]["status"], "failed");
    }

    #[test]
    fn missing_directory_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/report.json");

        let result = sample().write_json(&path);
        assert!(matches!(result, Err(ReportError::IoError { .. })));
    }
}
