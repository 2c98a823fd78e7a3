//! GitHub API error types.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors returned by an [`IssueTracker`][super::IssueTracker].
///
/// Only the distinctions the importer acts on are modelled: a missing
/// resource, a field-level validation rejection, and everything else.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The resource does not exist (HTTP 404).
    #[error("Not Found: {message}")]
    NotFound { message: String },

    /// The request was rejected with field-level errors (HTTP 422).
    #[error("Validation Failed: {}", join_field_errors(.errors))]
    Validation {
        errors: Vec<FieldError>,
        documentation_url: Option<String>,
    },

    /// Any other failure (auth, network, rate limit, server errors).
    #[error("{message}")]
    Remote {
        status: Option<u16>,
        message: String,
        documentation_url: Option<String>,
    },
}

impl ApiError {
    /// Returns true if the error is a 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the documentation link GitHub attached to the error, if any.
    #[must_use]
    pub fn documentation_url(&self) -> Option<&str> {
        match self {
            Self::Validation {
                documentation_url, ..
            }
            | Self::Remote {
                documentation_url, ..
            } => documentation_url.as_deref(),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                let status = source.status_code.as_u16();
                let documentation_url = source.documentation_url.clone();
                let errors: Vec<FieldError> = source
                    .errors
                    .iter()
                    .flatten()
                    .map(FieldError::from_value)
                    .collect();

                match status {
                    404 => Self::NotFound {
                        message: source.message.clone(),
                    },
                    422 if !errors.is_empty() => Self::Validation {
                        errors,
                        documentation_url,
                    },
                    _ => Self::Remote {
                        status: Some(status),
                        message: source.message.clone(),
                        documentation_url,
                    },
                }
            }
            other => Self::Remote {
                status: None,
                message: other.to_string(),
                documentation_url: None,
            },
        }
    }
}

/// A single field-level error from a GitHub validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    /// Resource the error applies to (e.g. "Issue").
    #[serde(default)]
    pub resource: Option<String>,

    /// Field that failed validation.
    #[serde(default)]
    pub field: Option<String>,

    /// Machine-readable error code (e.g. "invalid", "missing_field").
    #[serde(default)]
    pub code: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub message: Option<String>,
}

impl FieldError {
    /// Decodes a field error, tolerating GitHub's occasional plain-string errors.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(message) => Self {
                message: Some(message.clone()),
                ..Self::default()
            },
            other => serde_json::from_value(other.clone()).unwrap_or_else(|_| Self {
                message: Some(other.to_string()),
                ..Self::default()
            }),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.field, &self.code, &self.message]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();
        f.write_str(&parts.join(" "))
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_message_joins_field_errors() {
        let error = ApiError::Validation {
            errors: vec![
                FieldError::from_value(&json!({
                    "resource": "Issue",
                    "field": "assignees",
                    "code": "invalid"
                })),
                FieldError::from_value(&json!({
                    "resource": "Issue",
                    "field": "milestone",
                    "code": "custom",
                    "message": "milestone is closed"
                })),
            ],
            documentation_url: None,
        };

        assert_eq!(
            error.to_string(),
            "Validation Failed: assignees invalid; milestone custom milestone is closed"
        );
    }

    #[test]
    fn field_errors_accept_plain_strings() {
        let error = FieldError::from_value(&json!("title is too long"));
        assert_eq!(error.to_string(), "title is too long");
    }

    #[test]
    fn remote_errors_expose_documentation_url() {
        let error = ApiError::Remote {
            status: Some(403),
            message: "Resource not accessible by integration".to_string(),
            documentation_url: Some("https://docs.github.com/rest".to_string()),
        };

        assert_eq!(error.to_string(), "Resource not accessible by integration");
        assert_eq!(error.documentation_url(), Some("https://docs.github.com/rest"));
        assert!(!error.is_not_found());
    }
}
