//! Runner configuration.

use crate::github::RepositoryRef;
use crate::rate_limit::Pacer;
use crate::records::InputFormat;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for an import run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the CSV or JSON input file.
    input_path: PathBuf,
    /// Explicit input format; inferred from the extension when absent.
    format: Option<InputFormat>,
    /// Repository issues are imported into.
    repository: RepositoryRef,
    /// GitHub token used for API calls.
    token: String,
    /// Custom API base URL (GitHub Enterprise).
    api_url: Option<Url>,
    /// Whether to validate only, without creating issues.
    dry_run: bool,
    /// Delay policy between issue creations.
    pacer: Pacer,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        input_path: PathBuf,
        repository: RepositoryRef,
        token: String,
        dry_run: bool,
    ) -> Self {
        Self {
            input_path,
            format: None,
            repository,
            token,
            api_url: None,
            dry_run,
            pacer: Pacer::default(),
        }
    }

    /// Sets an explicit input format.
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets a custom API base URL.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Sets the delay policy between issue creations.
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Returns the input file path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Returns the input format, explicit or inferred from the file extension.
    pub fn format(&self) -> Option<InputFormat> {
        self.format
            .or_else(|| InputFormat::from_path(&self.input_path))
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the custom API base URL, if any.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the delay policy.
    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }
}
