// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only value source trait definition.
//!
//! This module defines the `ValueSource` trait, the read half of the store
//! port. Loading typed fields only needs a source, so shared borrows of a store
//! and read-only prefixed views can be bound as well.

use crate::domain::{ConfigError, FromValue, Result, Value};

/// A readable mapping from keys to scalar values.
///
/// All lookups are by exact key.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::ports::ValueSource;
/// use bstkcfg::store::FlatStore;
///
/// fn dpi(source: &dyn ValueSource) -> i64 {
///     source.get("dpi").map(|v| v.to_integer()).unwrap_or(240)
/// }
///
/// assert_eq!(dpi(&FlatStore::parse("dpi=\"320\"")), 320);
/// assert_eq!(dpi(&FlatStore::new()), 240);
/// ```
pub trait ValueSource {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Returns every key whose leading bytes equal `prefix`.
    ///
    /// The match is a plain string prefix and is not aware of path segments:
    /// `"bst.io"` matches the prefix `"bst.i"`. An empty prefix matches all keys.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;

    /// Returns `true` if `key` is present.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Reads `key` as `T` using the value's coercion rules.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeConversionError`] when the stored value
    /// cannot be read as `T` (only possible for floating point targets).
    fn get_as<T: FromValue>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        self.get(key)
            .map(|value| {
                T::from_value(value).map_err(|e| {
                    ConfigError::conversion(key, std::any::type_name::<T>(), e)
                })
            })
            .transpose()
    }

    /// Reads `key` as `T`, falling back to `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Same as [`ValueSource::get_as`].
    fn get_or<T: FromValue>(&self, key: &str, default: T) -> Result<T>
    where
        Self: Sized,
    {
        Ok(self.get_as(key)?.unwrap_or(default))
    }
}
