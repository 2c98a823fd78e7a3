//! Configuration loading.
//!
//! Settings may come from a TOML file; the CLI layers its own arguments on
//! top before building a [`RunnerConfig`][crate::RunnerConfig].

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::ImporterSettings;

use std::path::Path;
use tracing::info;
use url::Url;

/// Loads importer settings from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file doesn't exist, can't be read, or
/// isn't valid settings TOML.
pub fn load_settings(path: &Path) -> Result<ImporterSettings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings: ImporterSettings =
        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

    info!(path = %path.display(), "Loaded settings");
    Ok(settings)
}

/// Parses and validates a GitHub API base URL (e.g. for GitHub Enterprise).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidApiUrl`] if the value is not an absolute URL.
pub fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidApiUrl {
        value: value.to_string(),
        source: e,
    })
}
