//! Importer settings file deserialization.

use crate::records::InputFormat;
use serde::Deserialize;

/// Optional defaults read from a TOML settings file.
///
/// Every field is optional; command line arguments take precedence.
///
/// ```toml
/// repository = "octo-org/octo-repo"
/// format = "csv"
/// request-delay-ms = 250
/// respect-rate-limit = true
/// dry-run = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ImporterSettings {
    /// Target repository in `owner/name` form.
    pub repository: Option<String>,

    /// Input format, when it cannot be inferred from the file extension.
    pub format: Option<InputFormat>,

    /// Pause between issue creations, in milliseconds.
    pub request_delay_ms: Option<u64>,

    /// Whether to wait for the rate limit window to reset when nearly exhausted.
    pub respect_rate_limit: Option<bool>,

    /// Whether to validate only, without creating issues.
    pub dry_run: Option<bool>,
}
