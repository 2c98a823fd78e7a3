//! Import outcomes, summary and reporting.

mod error;
mod import_summary;
mod outcome;
mod report;

pub use error::ReportError;
pub use import_summary::ImportSummary;
pub use outcome::ImportOutcome;
pub use report::ImportReport;
