//! Input file parsing.
//!
//! This module turns the raw content of a CSV or JSON file into an ordered
//! list of [`RawRecord`]s. Only structural well-formedness is checked here;
//! field validation happens later, per record.

mod error;
mod format;
mod raw_record;

pub use error::ParseError;
pub use format::InputFormat;
pub use raw_record::RawRecord;

use csv::ReaderBuilder;
use serde_json::Value;
use tracing::debug;

/// Parses file content in the given format into records, preserving order.
///
/// # Errors
///
/// Returns [`ParseError`] if the content is not structurally valid for the
/// format. A CSV error lists every malformed row, not just the first.
pub fn parse_records(content: &str, format: InputFormat) -> Result<Vec<RawRecord>, ParseError> {
    let records = match format {
        InputFormat::Csv => parse_csv(content)?,
        InputFormat::Json => parse_json(content)?,
    };

    debug!(format = %format, count = records.len(), "Parsed input records");
    Ok(records)
}

/// Parses CSV content, using the first row as the header.
fn parse_csv(content: &str) -> Result<Vec<RawRecord>, ParseError> {
    // The reader closes a dangling quote at end of input, swallowing the rows after it.
    if let Some(line) = unterminated_quote_line(content) {
        return Err(ParseError::Csv {
            issues: vec![format!("unterminated quoted field starting on line {line}")],
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::Csv {
            issues: vec![e.to_string()],
        })?
        .clone();

    let mut records: Vec<RawRecord> = Vec::new();
    let mut issues = Vec::new();

    for result in reader.records() {
        match result {
            Ok(row) => records.push(
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
                    .collect(),
            ),
            Err(e) => {
                let stop = e.is_io_error();
                issues.push(e.to_string());
                if stop {
                    break;
                }
            }
        }
    }

    if !issues.is_empty() {
        return Err(ParseError::Csv { issues });
    }

    Ok(records)
}

/// Returns the line on which a quoted field opens without ever being closed.
///
/// A quote only opens a field when it is the first character of that field,
/// and `""` inside a quoted field is an escaped quote.
fn unterminated_quote_line(content: &str) -> Option<usize> {
    let mut line = 1;
    let mut opened_at = None;
    let mut at_field_start = true;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if opened_at.is_some() {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => {
                    opened_at = None;
                    at_field_start = false;
                }
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if at_field_start => opened_at = Some(line),
            ',' | '\r' => at_field_start = true,
            '\n' => {
                line += 1;
                at_field_start = true;
            }
            _ => at_field_start = false,
        }
    }

    opened_at
}

/// The accepted top-level JSON shapes.
enum JsonDocument {
    /// `[{...}, {...}]`
    Bare(Vec<Value>),
    /// `{"issues": [{...}, {...}]}`
    Wrapped(Vec<Value>),
}

impl TryFrom<Value> for JsonDocument {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(Self::Bare(items)),
            Value::Object(mut object) => match object.remove("issues") {
                Some(Value::Array(items)) => Ok(Self::Wrapped(items)),
                Some(other) => Err(ParseError::UnsupportedShape {
                    found: describe(&other),
                }),
                None => Err(ParseError::UnsupportedShape {
                    found: "an object without an \"issues\" key",
                }),
            },
            other => Err(ParseError::UnsupportedShape {
                found: describe(&other),
            }),
        }
    }
}

impl JsonDocument {
    fn into_records(self) -> Result<Vec<RawRecord>, ParseError> {
        let items = match self {
            Self::Bare(items) | Self::Wrapped(items) => items,
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(RawRecord::new(fields)),
                _ => Err(ParseError::NonObjectRecord { index }),
            })
            .collect()
    }
}

fn parse_json(content: &str) -> Result<Vec<RawRecord>, ParseError> {
    let value: Value = serde_json::from_str(content)?;
    JsonDocument::try_from(value)?.into_records()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
