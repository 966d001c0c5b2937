//! JSON parsing into the tree representation.
//!
//! The grammar itself is delegated to `serde_json`; this module only
//! converts the decoded document into our [`Value`] tree.

use crate::error::ParseError;
use crate::tree::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parses a JSON string into a Value.
///
/// # Examples
///
/// ```
/// use jdiff_rs::parser::parse_json;
///
/// let json = r#"{"name": "Alice", "age": 30}"#;
/// let value = parse_json(json).unwrap();
/// ```
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a JSON file into a Value.
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The file contains invalid JSON (`ParseError::JsonError`)
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    parse_json(&content)
        .map_err(|e| ParseError::json_error(path.to_string_lossy().to_string(), e))
}

/// Converts a serde_json::Value to our Value representation.
fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            // as_f64 covers every number serde_json produces without
            // the arbitrary_precision feature.
            Value::Number(n.as_f64().unwrap_or(0.0))
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: BTreeMap<String, Value> = obj
                .into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}
