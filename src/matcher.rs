//! Ignore-pattern matching for diff paths.
//!
//! A pattern is a concrete path string, optionally containing the `[*]`
//! wildcard in place of an array index: `items[*].price` covers
//! `items[0].price`, `items[17].price`, and so on. A pattern without a
//! wildcard only covers the identical path.
//!
//! # Examples
//!
//! ```
//! use jdiff_rs::matcher::{matches, is_ignored};
//!
//! assert!(matches("a[0].b", "a[*].b"));
//! assert!(!matches("a[0].c", "a[*].b"));
//!
//! let patterns = vec!["metadata.updated_at".to_string()];
//! assert!(is_ignored("metadata.updated_at", &patterns));
//! assert!(!is_ignored("metadata.author", &patterns));
//! ```

use regex::Regex;

const WILDCARD: &str = "[*]";

/// Checks whether a concrete path is covered by an ignore pattern.
///
/// Matching is anchored: the pattern must cover the whole path, never a
/// prefix of it. A pattern that fails to compile covers nothing;
/// filtering is advisory, so a bad pattern is not an error.
pub fn matches(path: &str, pattern: &str) -> bool {
    if path == pattern {
        return true;
    }

    if !pattern.contains(WILDCARD) {
        return false;
    }

    // Escape before substituting, so a literal bracket elsewhere in the
    // pattern cannot be misread as part of a wildcard.
    let escaped = regex::escape(pattern);
    let substituted = escaped.replace(r"\[\*\]", r"\[\d+\]");

    match Regex::new(&format!("^{}$", substituted)) {
        Ok(re) => re.is_match(path),
        Err(_) => false,
    }
}

/// Checks whether a path is covered by any of the given patterns.
///
/// An empty pattern list ignores nothing. Short-circuits on the first
/// covering pattern.
pub fn is_ignored(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| matches(path, pattern))
}
