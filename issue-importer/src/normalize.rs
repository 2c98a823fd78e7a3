//! Normalization of multi-value issue fields.
//!
//! Spreadsheet exports are inconsistent about list separators, so both `,`
//! and `;` are accepted and may be mixed freely within one value.

use serde_json::Value;

/// Normalizes a raw `labels` value into an ordered list of label names.
#[must_use]
pub fn normalize_labels(value: Option<&Value>) -> Vec<String> {
    normalize_list(value)
}

/// Normalizes a raw `assignees` value into an ordered list of usernames.
#[must_use]
pub fn normalize_assignees(value: Option<&Value>) -> Vec<String> {
    normalize_list(value)
}

/// Shared rules for list-like fields:
///
/// - absent or `null` yields an empty list
/// - arrays keep their non-empty string elements, untrimmed
/// - strings are split on `,` and `;`, trimmed, and empty pieces dropped
/// - anything else yields an empty list
fn normalize_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(joined)) => split_delimited(joined),
        _ => Vec::new(),
    }
}

fn split_delimited(joined: &str) -> Vec<String> {
    joined
        .replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
