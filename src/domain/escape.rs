// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escaping rules for quoted text values.
//!
//! Five characters are escaped inside a quoted value: `"`, `\`, newline,
//! carriage return and tab. Any other backslash sequence is left as-is.

/// Escapes `"`, `\`, `\n`, `\r` and `\t` with a backslash.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::escape::escape;
///
/// assert_eq!(escape("say \"hi\"\n"), "say \\\"hi\\\"\\n");
/// ```
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result
}

/// Reverses [`escape`].
///
/// Unrecognized sequences such as `\x` are kept verbatim: the backslash is
/// emitted and the following character is processed on its own.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::escape::unescape;
///
/// assert_eq!(unescape("C:\\\\Program Files\\\\BlueStacks"), "C:\\Program Files\\BlueStacks");
/// assert_eq!(unescape("a\\qb"), "a\\qb");
/// ```
pub fn unescape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let replacement = match chars.peek() {
            Some('"') => Some('"'),
            Some('\\') => Some('\\'),
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            _ => None,
        };

        match replacement {
            Some(r) => {
                result.push(r);
                chars.next();
            }
            None => result.push('\\'),
        }
    }

    result
}
