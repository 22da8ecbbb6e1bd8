// SPDX-License-Identifier: MIT OR Apache-2.0

//! `KEY="VALUE"` line format adapter.
//!
//! This module provides the parser for the line-oriented format used by the
//! store on disk:
//!
//! ```text
//! # comment
//! bst.country="US"
//! bst.instance.Pie64.fb_width="1280"
//! ```
//!
//! Values are written quoted, but unquoted values are accepted on read. The
//! type of every value is inferred from its text.

use crate::domain::escape::unescape;
use crate::domain::Value;
use crate::ports::{ConfigParser, ParsedLine};

pub use crate::domain::escape::escape;

/// Parser for the `KEY=VALUE` line format.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::adapters::KeyValueParser;
/// use bstkcfg::domain::Value;
/// use bstkcfg::ports::ConfigParser;
///
/// let parser = KeyValueParser::new();
/// let line = parser.parse_line("  bst.locale = \"en-US\" ").unwrap();
/// assert_eq!(line.key, "bst.locale");
/// assert_eq!(line.raw_value, "en-US");
///
/// assert_eq!(parser.infer_value("16384"), Value::Integer(16384));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyValueParser;

impl KeyValueParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        KeyValueParser
    }

    fn trim(s: &str) -> &str {
        s.trim_matches(|c: char| c.is_ascii_whitespace())
    }

    fn looks_like_bool(s: &str) -> bool {
        matches!(s, "0" | "1" | "true" | "false" | "True" | "False")
    }

    fn looks_like_int(s: &str) -> bool {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }

    fn looks_like_real(s: &str) -> bool {
        let body = s.strip_prefix(['+', '-']).unwrap_or(s);
        !body.is_empty()
            && body.bytes().filter(|&b| b == b'.').count() == 1
            && body.bytes().all(|b| b == b'.' || b.is_ascii_digit())
    }
}

impl ConfigParser for KeyValueParser {
    fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        let line = Self::trim(line);
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (key, value) = line.split_once('=')?;
        let key = Self::trim(key);
        if key.is_empty() {
            return None;
        }
        let value = Self::trim(value);

        let raw_value = match value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
        {
            Some(inner) => unescape(inner),
            None => value.to_string(),
        };

        Some(ParsedLine {
            key: key.to_string(),
            raw_value,
        })
    }

    fn infer_value(&self, raw_value: &str) -> Value {
        if Self::looks_like_bool(raw_value) {
            return Value::Boolean(matches!(raw_value, "1" | "true" | "True"));
        }
        if Self::looks_like_int(raw_value) {
            // digit runs that overflow i64 stay text
            if let Ok(i) = raw_value.parse::<i64>() {
                return Value::Integer(i);
            }
        } else if Self::looks_like_real(raw_value) {
            if let Ok(r) = raw_value.parse::<f64>() {
                return Value::Real(r);
            }
        }
        Value::Text(raw_value.to_string())
    }

    fn format_entry(&self, key: &str, value: &Value) -> String {
        format!("{}={}", key, value)
    }
}
