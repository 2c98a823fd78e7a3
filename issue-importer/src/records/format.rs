//! Supported input formats.

use super::ParseError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Format of an issue input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Comma separated values with a header row.
    Csv,
    /// A JSON array of issues, or an object with an `issues` array.
    Json,
}

impl InputFormat {
    /// Infers the format from a file extension (`.csv` or `.json`).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// Returns the canonical tag for this format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for InputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_format_tags() {
        assert_eq!("csv".parse::<InputFormat>().unwrap(), InputFormat::Csv);
        assert_eq!("JSON".parse::<InputFormat>().unwrap(), InputFormat::Json);
        assert!(matches!(
            "yaml".parse::<InputFormat>(),
            Err(ParseError::UnknownFormat(_))
        ));
    }

    #[test]
    fn can_infer_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("issues.CSV")),
            Some(InputFormat::Csv)
        );
        assert_eq!(
            InputFormat::from_path(Path::new("data/issues.json")),
            Some(InputFormat::Json)
        );
        assert_eq!(InputFormat::from_path(Path::new("issues.txt")), None);
        assert_eq!(InputFormat::from_path(Path::new("issues")), None);
    }
}
