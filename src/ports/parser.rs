// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, the interface between the flat
//! store and a line-oriented text format.

use crate::domain::Value;

/// A `KEY=VALUE` pair recognized on one line, before type inference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// The trimmed key text.
    pub key: String,
    /// The value text, unquoted and unescaped when it was quoted.
    pub raw_value: String,
}

/// A trait for line-oriented configuration formats.
///
/// A parser recognizes single lines, infers a typed [`Value`] from raw value
/// text, and renders entries back into lines. Lines that are not entries are
/// rejected with `None` and never reported as errors.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::domain::Value;
/// use bstkcfg::ports::{ConfigParser, ParsedLine};
///
/// struct ColonParser;
///
/// impl ConfigParser for ColonParser {
///     fn parse_line(&self, line: &str) -> Option<ParsedLine> {
///         let (key, value) = line.split_once(':')?;
///         Some(ParsedLine {
///             key: key.trim().to_string(),
///             raw_value: value.trim().to_string(),
///         })
///     }
///
///     fn infer_value(&self, raw_value: &str) -> Value {
///         Value::from(raw_value)
///     }
///
///     fn format_entry(&self, key: &str, value: &Value) -> String {
///         format!("{}: {}", key, value.to_text())
///     }
/// }
///
/// let entries = ColonParser.parse("a: 1\nnot an entry\nb: two");
/// assert_eq!(entries.len(), 2);
/// ```
pub trait ConfigParser {
    /// Recognizes a single line, returning `None` for blank lines, comments
    /// and anything malformed.
    fn parse_line(&self, line: &str) -> Option<ParsedLine>;

    /// Infers a typed value from raw (already unquoted) value text.
    fn infer_value(&self, raw_value: &str) -> Value;

    /// Renders one entry as a line, without the trailing newline.
    fn format_entry(&self, key: &str, value: &Value) -> String;

    /// Parses a whole document into typed entries, in document order.
    ///
    /// Lines are split on `\n`; unrecognized lines are skipped silently.
    fn parse(&self, content: &str) -> Vec<(String, Value)> {
        content
            .split('\n')
            .filter_map(|line| self.parse_line(line))
            .map(|parsed| {
                let value = self.infer_value(&parsed.raw_value);
                (parsed.key, value)
            })
            .collect()
    }
}
