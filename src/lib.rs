//! JDIFF - Structural diff for JSON documents.
//!
//! This library compares two JSON documents and reports their
//! differences as dotted/bracketed key paths (`user.name`,
//! `items[2].price`), classified as added, removed, or changed. Paths
//! matching caller-supplied ignore patterns are suppressed, including
//! the `[*]` wildcard that matches any array index.
//!
//! # Example
//!
//! ```
//! use jdiff_rs::{compare_json_with_ignore, format_diff, OutputFormat};
//!
//! let first = r#"{"name":"Alice","age":30,"hobbies":["reading","swimming"]}"#;
//! let second = r#"{"name":"Alice","age":31,"hobbies":["reading","cycling"],"email":"alice@example.com"}"#;
//!
//! let result = compare_json_with_ignore(first, second, &[]).unwrap();
//! assert_eq!(result.added, vec!["email"]);
//! assert!(result.changed.contains_key("age"));
//! assert!(result.changed.contains_key("hobbies[1]"));
//!
//! let output = format_diff(&result, &OutputFormat::Plain).unwrap();
//! println!("{}", output);
//! ```

pub mod diff;
pub mod error;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod tree;

// Re-export commonly used types for convenience
pub use diff::{compare_json, compare_json_with_ignore, diff, DiffResult};
pub use error::{CompareError, InputSide, JdiffError, OutputError, ParseError};
pub use matcher::{is_ignored, matches};
pub use output::{format_diff, OutputFormat};
pub use parser::{parse_file, parse_json};
pub use tree::Value;
