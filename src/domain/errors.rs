// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! Most store operations never fail: malformed lines are skipped and lossy
//! coercions fall back to default values. The errors below cover the few paths
//! that do fail, namely file I/O and reading non-numeric text as a real number.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration store operations.
///
/// # Examples
///
/// ```
/// use bstkcfg::domain::errors::ConfigError;
/// use bstkcfg::domain::Value;
///
/// let err = Value::from("abc").to_real().unwrap_err();
/// assert!(matches!(err, ConfigError::InvalidNumber { .. }));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A text value could not be read as a floating point literal.
    #[error("Value {text:?} is not a valid real number: {source}")]
    InvalidNumber {
        /// The offending text
        text: String,
        /// The underlying parse error
        #[source]
        source: ParseFloatError,
    },

    /// Failed to convert the value stored under a key to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading or writing a configuration file failed.
    #[error("Failed to {operation} configuration file '{}': {source}", .path.display())]
    FileError {
        /// The file that was being accessed
        path: PathBuf,
        /// Either "read" or "write"
        operation: &'static str,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Wraps a conversion failure with the key whose value was being read.
    pub fn conversion<E>(key: impl Into<String>, target_type: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::TypeConversionError {
            key: key.into(),
            target_type: target_type.into(),
            source: Box::new(err),
        }
    }

    /// Prepends `prefix` to the key of a `TypeConversionError`.
    ///
    /// Used when a failure under a scoped view must name the full stored key.
    /// Other variants are returned unchanged.
    pub fn with_key_prefix(self, prefix: &str) -> Self {
        match self {
            ConfigError::TypeConversionError {
                key,
                target_type,
                source,
            } => ConfigError::TypeConversionError {
                key: format!("{}{}", prefix, key),
                target_type,
                source,
            },
            other => other,
        }
    }

    /// Creates a `FileError` for a failed read of `path`.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::FileError {
            path: path.into(),
            operation: "read",
            source,
        }
    }

    /// Creates a `FileError` for a failed write of `path`.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::FileError {
            path: path.into(),
            operation: "write",
            source,
        }
    }
}

/// A specialized Result type for configuration store operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_error() {
        let source = "abc".parse::<f64>().unwrap_err();
        let error = ConfigError::InvalidNumber {
            text: "abc".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Value \"abc\" is not a valid real number"));
    }

    #[test]
    fn test_conversion_error_names_key() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = ConfigError::conversion("bst.instance.Pie64.dpi", "f64", parse_err);
        assert!(matches!(error, ConfigError::TypeConversionError { .. }));
        assert!(error.to_string().contains("bst.instance.Pie64.dpi"));
        assert!(error.to_string().contains("f64"));
    }

    #[test]
    fn test_file_error_display() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::read_failed("/tmp/bluestacks.conf", io_error);
        assert_eq!(
            error.to_string(),
            "Failed to read configuration file '/tmp/bluestacks.conf': file not found"
        );

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ConfigError::write_failed("/tmp/out.conf", io_error);
        assert!(error.to_string().starts_with("Failed to write"));
    }

    #[test]
    fn test_with_key_prefix() {
        let parse_err = "fast".parse::<f64>().unwrap_err();
        let error = ConfigError::conversion("max_fps", "real", parse_err)
            .with_key_prefix("bst.instance.Pie64.");
        assert!(error
            .to_string()
            .contains("'bst.instance.Pie64.max_fps'"));

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = ConfigError::read_failed("a.conf", io_error).with_key_prefix("bst.");
        assert!(matches!(error, ConfigError::FileError { .. }));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
    }
}
