//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse settings in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// Repository is not in `owner/name` form.
    #[error("Invalid repository '{value}', expected 'owner/name'")]
    InvalidRepository { value: String },

    /// API base URL is not a valid absolute URL.
    #[error("Invalid API URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A required setting was not provided.
    #[error("Missing required setting: {name}")]
    MissingSetting { name: &'static str },
}
