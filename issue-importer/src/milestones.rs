//! Milestone lookup and resolution.

use crate::github::{IssueTracker, Milestone};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Milestone titles mapped to their numbers, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneMap {
    by_title: HashMap<String, u64>,
}

impl MilestoneMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of the milestone with exactly this title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<u64> {
        self.by_title.get(title).copied()
    }

    /// Returns the number of known milestones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    /// Returns true if no milestones are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}

impl FromIterator<Milestone> for MilestoneMap {
    fn from_iter<I: IntoIterator<Item = Milestone>>(iter: I) -> Self {
        Self {
            by_title: iter
                .into_iter()
                .map(|milestone| (milestone.title, milestone.number))
                .collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for MilestoneMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        Self {
            by_title: iter
                .into_iter()
                .map(|(title, number)| (title.to_string(), number))
                .collect(),
        }
    }
}

/// Fetches every milestone of the repository (open and closed).
///
/// Resolution by title is best-effort: if the listing fails, a warning is
/// logged and an empty map is returned, so only numeric references resolve.
pub async fn fetch_milestone_map(tracker: &dyn IssueTracker) -> MilestoneMap {
    match tracker.list_milestones().await {
        Ok(milestones) => {
            let map: MilestoneMap = milestones.into_iter().collect();
            info!(count = map.len(), "Loaded milestones");
            map
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch milestones, milestone titles will not resolve");
            MilestoneMap::new()
        }
    }
}

/// Resolves a raw milestone reference to a milestone number.
///
/// A string made only of digits is taken as a milestone number before the
/// title lookup, so a milestone titled `"5"` cannot be referenced by title.
/// Unresolvable references log a warning and resolve to `None`; they never
/// block issue creation.
#[must_use]
pub fn resolve_milestone(reference: Option<&Value>, milestones: &MilestoneMap) -> Option<u64> {
    let reference = reference.filter(|value| is_truthy(value))?;

    match reference {
        Value::Number(number) => {
            let resolved = number.as_u64();
            if resolved.is_none() {
                warn!(milestone = %number, "Milestone number is not a positive integer, skipping");
            }
            resolved
        }
        Value::String(text) => {
            if let Ok(number) = text.parse::<u64>() {
                debug!(milestone = number, "Using numeric milestone reference");
                return Some(number);
            }
            let resolved = milestones.get(text);
            if resolved.is_none() {
                warn!(milestone = %text, "Milestone not found, creating issue without it");
            }
            resolved
        }
        other => {
            warn!(milestone = %other, "Unsupported milestone reference, skipping");
            None
        }
    }
}

/// Mirrors the loose "is set" check used on raw input: `null`, `false`,
/// `0` and `""` all mean "no milestone".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
