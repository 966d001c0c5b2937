//! Core structural diff algorithm.
//!
//! This module walks two parsed trees in lock-step and accumulates the
//! key paths that were added, removed, or changed between them. Paths
//! use dotted keys for objects and bracketed indices for arrays
//! (`users[2].name`), and the same strings double as the addressing
//! scheme for ignore patterns.
//!
//! # Examples
//!
//! ```
//! use jdiff_rs::compare_json;
//!
//! let first = r#"{"name":"Alice","age":30}"#;
//! let second = r#"{"name":"Alice","age":31,"email":"alice@example.com"}"#;
//!
//! let result = compare_json(first, second).unwrap();
//! assert_eq!(result.added, vec!["email"]);
//! assert!(result.changed.contains_key("age"));
//! assert!(result.removed.is_empty());
//! ```

use crate::error::{CompareError, InputSide};
use crate::matcher::is_ignored;
use crate::parser::parse_json;
use crate::tree::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// The outcome of one comparison.
///
/// Built incrementally during a single comparison call and not mutated
/// afterwards. Serializes to an object with `added`, `removed`, and
/// `changed` keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffResult {
    /// Paths present only in the second document, in discovery order.
    pub added: Vec<String>,
    /// Paths present only in the first document, in discovery order.
    pub removed: Vec<String>,
    /// Paths whose value differs, with a description of the change.
    /// Each path appears at most once.
    pub changed: BTreeMap<String, String>,
}

impl DiffResult {
    /// Returns true if the two documents were structurally identical.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of reported differences.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

/// Parses and compares two JSON documents.
///
/// # Errors
///
/// Returns a [`CompareError`] naming the offending document if either
/// input is not well-formed JSON. No comparison is attempted in that
/// case.
pub fn compare_json(first: &str, second: &str) -> Result<DiffResult, CompareError> {
    compare_json_with_ignore(first, second, &[])
}

/// Parses and compares two JSON documents, suppressing every path
/// covered by one of the ignore patterns.
///
/// Ignoring a path suppresses its entire subtree: differences nested
/// under an ignored object or array are never reported. An empty
/// pattern list disables all filtering.
///
/// # Errors
///
/// Returns a [`CompareError`] naming the offending document if either
/// input is not well-formed JSON.
///
/// # Examples
///
/// ```
/// use jdiff_rs::compare_json_with_ignore;
///
/// let first = r#"{"items":[{"price":1.0,"name":"tea"}]}"#;
/// let second = r#"{"items":[{"price":2.0,"name":"chai"}]}"#;
///
/// let ignore = vec!["items[*].price".to_string()];
/// let result = compare_json_with_ignore(first, second, &ignore).unwrap();
///
/// assert!(result.changed.contains_key("items[0].name"));
/// assert!(!result.changed.contains_key("items[0].price"));
/// ```
pub fn compare_json_with_ignore(
    first: &str,
    second: &str,
    ignore: &[String],
) -> Result<DiffResult, CompareError> {
    let a = parse_json(first).map_err(|source| CompareError::parse(InputSide::First, source))?;
    let b = parse_json(second).map_err(|source| CompareError::parse(InputSide::Second, source))?;
    Ok(diff(&a, &b, ignore))
}

/// Compares two parsed documents.
///
/// This is a total function: any two well-formed trees produce a
/// result. The comparison itself never fails.
pub fn diff(a: &Value, b: &Value, ignore: &[String]) -> DiffResult {
    let mut result = DiffResult::default();
    compare("", a, b, &mut result, ignore);
    result
}

/// Recursively compares two values and records differences.
///
/// The ignore check comes before everything else, including recursion:
/// an ignored path contributes no entry and its children are never
/// visited.
fn compare(path: &str, a: &Value, b: &Value, result: &mut DiffResult, ignore: &[String]) {
    if is_ignored(path, ignore) {
        return;
    }

    match (a, b) {
        (Value::Null, Value::Null) => {}
        (Value::Null, other) => {
            result.changed.insert(
                path.to_string(),
                format!("value changed: null -> {}", other.describe()),
            );
        }
        (other, Value::Null) => {
            result.changed.insert(
                path.to_string(),
                format!("value changed: {} -> null", other.describe()),
            );
        }
        (Value::Object(a_map), Value::Object(b_map)) => {
            compare_objects(path, a_map, b_map, result, ignore);
        }
        (Value::Array(a_arr), Value::Array(b_arr)) => {
            compare_arrays(path, a_arr, b_arr, result, ignore);
        }
        _ if a.type_name() != b.type_name() => {
            result.changed.insert(
                path.to_string(),
                format!("type changed: {} -> {}", a.type_name(), b.type_name()),
            );
        }
        _ => {
            if a != b {
                result.changed.insert(
                    path.to_string(),
                    format!("value changed: {} -> {}", a.describe(), b.describe()),
                );
            }
        }
    }
}

/// Compares two objects key by key.
///
/// Keys only in the first object are recorded as removed, keys only in
/// the second as added, shared keys recurse. The surrounding path was
/// already cleared by the caller, so only the child paths are checked
/// against the ignore patterns here.
fn compare_objects(
    path: &str,
    a: &BTreeMap<String, Value>,
    b: &BTreeMap<String, Value>,
    result: &mut DiffResult,
    ignore: &[String],
) {
    for (key, a_value) in a {
        let child = join_key(path, key);
        match b.get(key) {
            Some(b_value) => compare(&child, a_value, b_value, result, ignore),
            None => {
                if !is_ignored(&child, ignore) {
                    result.removed.push(child);
                }
            }
        }
    }

    for key in b.keys() {
        if !a.contains_key(key) {
            let child = join_key(path, key);
            if !is_ignored(&child, ignore) {
                result.added.push(child);
            }
        }
    }
}

/// Compares two arrays positionally.
///
/// A length difference is recorded at the array's own path, on top of
/// any per-element differences. Elements past the shorter length are
/// recorded as removed or added, depending on which side is longer.
fn compare_arrays(
    path: &str,
    a: &[Value],
    b: &[Value],
    result: &mut DiffResult,
    ignore: &[String],
) {
    if a.len() != b.len() {
        result.changed.insert(
            path.to_string(),
            format!("array length changed: {} -> {}", a.len(), b.len()),
        );
    }

    let shared = a.len().min(b.len());
    for i in 0..shared {
        let child = join_index(path, i);
        compare(&child, &a[i], &b[i], result, ignore);
    }

    for i in shared..a.len() {
        let child = join_index(path, i);
        if !is_ignored(&child, ignore) {
            result.removed.push(child);
        }
    }

    for i in shared..b.len() {
        let child = join_index(path, i);
        if !is_ignored(&child, ignore) {
            result.added.push(child);
        }
    }
}

/// Appends an object key to a parent path. The root path is empty, so
/// the first segment carries no leading dot.
fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Appends an array index to a parent path, with no dot before the
/// bracket.
fn join_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}
