//! Per-record import outcomes.

use serde::Serialize;

/// Result of importing a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImportOutcome {
    /// Issue successfully created.
    Created {
        /// Issue title.
        title: String,
        /// GitHub issue number.
        number: u64,
        /// GitHub issue URL.
        url: String,
    },

    /// Issue would have been created (dry run).
    DryRun {
        /// Issue title.
        title: String,
    },

    /// Record was rejected or creation failed.
    Failed {
        /// Issue title, or a placeholder when the record has none.
        title: String,
        /// Error message.
        error: String,
    },
}

impl ImportOutcome {
    /// Returns the issue title this outcome refers to.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Created { title, .. } | Self::DryRun { title } | Self::Failed { title, .. } => {
                title
            }
        }
    }

    /// Returns true for created and dry-run outcomes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}
