//! Custom error types for JDIFF.

use std::fmt;

/// Which of the two compared documents a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    First,
    Second,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSide::First => write!(f, "first"),
            InputSide::Second => write!(f, "second"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse failure for one of the two documents handed to the compare
/// service. Raised before any comparison begins; a failed comparison
/// never produces a partial result.
#[derive(Debug, thiserror::Error)]
#[error("Failed to parse {side} document: {source}")]
pub struct CompareError {
    pub side: InputSide,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum JdiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }
}

impl CompareError {
    pub fn parse(side: InputSide, source: serde_json::Error) -> Self {
        Self { side, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::file_not_found("test.json");
        assert_eq!(err.to_string(), "File not found: test.json");
    }

    #[test]
    fn test_compare_error_names_the_side() {
        let err = CompareError::parse(InputSide::First, json_error());
        assert!(err.to_string().contains("first document"));

        let err = CompareError::parse(InputSide::Second, json_error());
        assert!(err.to_string().contains("second document"));
    }

    #[test]
    fn test_input_side_display() {
        assert_eq!(InputSide::First.to_string(), "first");
        assert_eq!(InputSide::Second.to_string(), "second");
    }

    #[test]
    fn test_jdiff_error_from_parse_error() {
        let parse_err = ParseError::file_not_found("test.json");
        let err: JdiffError = parse_err.into();
        assert!(matches!(err, JdiffError::Parse(_)));
    }

    #[test]
    fn test_jdiff_error_from_compare_error() {
        let compare_err = CompareError::parse(InputSide::Second, json_error());
        let err: JdiffError = compare_err.into();
        assert!(matches!(err, JdiffError::Compare(_)));
    }
}
