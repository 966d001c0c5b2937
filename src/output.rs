//! Output formatting for diff results.
//!
//! Renders a [`DiffResult`] for terminals (colored), machines (JSON),
//! or pipes (plain text). Added paths come first, then removed, then
//! changed, each section followed by a one-line summary.

use crate::diff::DiffResult;
use crate::error::OutputError;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the diff
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Formats a diff result according to the specified format.
///
/// # Errors
///
/// Only the JSON format can fail, and only if serialization does.
///
/// # Examples
///
/// ```
/// use jdiff_rs::{compare_json, format_diff, OutputFormat};
///
/// let result = compare_json(r#"{"a":1}"#, r#"{"a":2}"#).unwrap();
/// let output = format_diff(&result, &OutputFormat::Plain).unwrap();
/// assert!(output.contains("a"));
/// ```
pub fn format_diff(result: &DiffResult, format: &OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_terminal(result)),
        OutputFormat::Json => format_json(result),
        OutputFormat::Plain => Ok(format_plain(result)),
    }
}

fn format_terminal(result: &DiffResult) -> String {
    if result.is_empty() {
        return "No differences detected.".dimmed().to_string();
    }

    let mut output = String::new();

    for path in &result.added {
        output.push_str(&format!("{} {}\n", "+".bright_green(), path.green()));
    }
    for path in &result.removed {
        output.push_str(&format!("{} {}\n", "-".bright_red(), path.red()));
    }
    for (path, change) in &result.changed {
        output.push_str(&format!(
            "{} {}: {}\n",
            "•".bright_yellow(),
            path.yellow(),
            change.yellow()
        ));
    }

    output.push('\n');
    output.push_str(&format_summary(result));

    output
}

/// Formats a diff result as JSON: an object with `added`, `removed`,
/// and `changed` keys.
fn format_json(result: &DiffResult) -> Result<String, OutputError> {
    serde_json::to_string_pretty(result)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn format_plain(result: &DiffResult) -> String {
    if result.is_empty() {
        return "No differences detected.".to_string();
    }

    let mut output = String::new();

    for path in &result.added {
        output.push_str(&format!("+ {}\n", path));
    }
    for path in &result.removed {
        output.push_str(&format!("- {}\n", path));
    }
    for (path, change) in &result.changed {
        output.push_str(&format!("• {}: {}\n", path, change));
    }

    output.push('\n');
    output.push_str(&format_summary(result));

    output
}

fn format_summary(result: &DiffResult) -> String {
    if result.is_empty() {
        return "Summary: no differences".to_string();
    }

    let mut parts = Vec::new();
    if !result.added.is_empty() {
        parts.push(format!("{} added", result.added.len()));
    }
    if !result.removed.is_empty() {
        parts.push(format!("{} removed", result.removed.len()));
    }
    if !result.changed.is_empty() {
        parts.push(format!("{} changed", result.changed.len()));
    }

    format!("Summary: {}", parts.join(", "))
}
