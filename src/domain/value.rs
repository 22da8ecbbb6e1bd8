// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar configuration values with lossy coercions.
//!
//! This module provides the `Value` type, a closed sum over text, integer,
//! real and boolean scalars. Every value can be read back as any of the four
//! kinds; only reading non-numeric text as a real number is an error.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::escape::escape;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar configuration value.
///
/// Equality is exact on the variant and its payload: `Value::Text("1")`,
/// `Value::Integer(1)` and `Value::Boolean(true)` are all distinct.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::Value;
///
/// let value = Value::from(16384i64);
/// assert!(value.is_integer());
/// assert_eq!(value.to_text(), "16384");
/// assert_eq!(value.to_string(), "\"16384\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Free-form text.
    Text(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// Double-precision real number.
    Real(f64),
    /// Boolean flag, written as `"1"` or `"0"`.
    Boolean(bool),
}

impl Value {
    /// Returns `true` if this is a text value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is an integer value.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if this is a real value.
    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Returns `true` if this is a boolean value.
    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns `true` for integer and real values.
    ///
    /// Note that `"0"` and `"1"` parse as booleans, so they are not numbers.
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_real()
    }

    /// Returns the text payload without copying, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value as plain (unquoted, unescaped) text.
    ///
    /// Booleans become `"1"`/`"0"`. Finite reals always carry a decimal point
    /// so the text reads back as a real. Non-finite reals render as `inf`,
    /// `-inf` or `NaN`, which read back as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstkcfg::domain::Value;
    ///
    /// assert_eq!(Value::from(true).to_text(), "1");
    /// assert_eq!(Value::from(2.0).to_text(), "2.0");
    /// assert_eq!(Value::from(-7i64).to_text(), "-7");
    /// ```
    pub fn to_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => format_real(*r),
            Value::Boolean(b) => (if *b { "1" } else { "0" }).to_string(),
        }
    }

    /// Reads the value as an integer. Never fails.
    ///
    /// Reals truncate toward zero, booleans map to 1/0, and text is parsed as
    /// a leading integer; text that does not start with one yields 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstkcfg::domain::Value;
    ///
    /// assert_eq!(Value::from(-3.9).to_integer(), -3);
    /// assert_eq!(Value::from("720p").to_integer(), 720);
    /// assert_eq!(Value::from("abc").to_integer(), 0);
    /// ```
    pub fn to_integer(&self) -> i64 {
        match self {
            Value::Integer(i) => *i,
            Value::Real(r) => *r as i64,
            Value::Boolean(b) => i64::from(*b),
            Value::Text(s) => leading_integer(s).unwrap_or(0),
        }
    }

    /// Reads the value as a real number.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a text value is not a
    /// floating point literal. All other variants convert infallibly.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstkcfg::domain::Value;
    ///
    /// assert_eq!(Value::from(" 2.5 ").to_real().unwrap(), 2.5);
    /// assert_eq!(Value::from(3i64).to_real().unwrap(), 3.0);
    /// assert!(Value::from("fast").to_real().is_err());
    /// ```
    pub fn to_real(&self) -> Result<f64> {
        match self {
            Value::Real(r) => Ok(*r),
            Value::Integer(i) => Ok(*i as f64),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|source| ConfigError::InvalidNumber {
                    text: s.clone(),
                    source,
                }),
        }
    }

    /// Reads the value as a boolean. Never fails.
    ///
    /// Numbers are true when nonzero. Text is true unless it is empty, `"0"`,
    /// `"false"` or `"False"`; any other text (including `"no"`) is true.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstkcfg::domain::Value;
    ///
    /// assert!(Value::from("no").to_boolean());
    /// assert!(!Value::from("False").to_boolean());
    /// assert!(Value::from(5i64).to_boolean());
    /// ```
    pub fn to_boolean(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Real(r) => *r != 0.0,
            Value::Text(s) => !matches!(s.as_str(), "" | "0" | "false" | "False"),
        }
    }
}

/// Formats a real so that it always contains a `.` when finite.
///
/// Infinities and NaN keep Rust's spelling and do not survive a save/load
/// cycle as reals.
fn format_real(r: f64) -> String {
    let text = r.to_string();
    if r.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Parses an optional sign and the digit run that follows it, ignoring any trailing text.
fn leading_integer(s: &str) -> Option<i64> {
    let digits_start = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..digits_start + digits_len].parse().ok()
}

impl Default for Value {
    fn default() -> Self {
        Value::Text(String::new())
    }
}

/// The canonical, always-quoted form written to configuration files.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "\"{}\"", escape(s)),
            other => write!(f, "\"{}\"", other.to_text()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<f32> for Value {
    fn from(r: f32) -> Self {
        Value::Real(f64::from(r))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Typed extraction from a [`Value`] using its coercion rules.
///
/// Integer types go through [`Value::to_integer`] and are narrowed with `as`;
/// floating types go through [`Value::to_real`].
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::{FromValue, Value};
///
/// let width = i32::from_value(&Value::from("1280")).unwrap();
/// assert_eq!(width, 1280);
/// ```
pub trait FromValue: Sized {
    /// Converts the value, failing only where [`Value::to_real`] fails.
    fn from_value(value: &Value) -> Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.to_text())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.to_boolean())
    }
}

macro_rules! impl_from_value_integer {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Result<Self> {
                    Ok(value.to_integer() as $t)
                }
            }
        )*
    };
}

impl_from_value_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        value.to_real()
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        value.to_real().map(|r| r as f32)
    }
}
