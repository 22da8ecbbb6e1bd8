// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value store trait definition.
//!
//! This module defines the `ValueStore` trait, the port through which schema
//! bindings and other callers write individual keys. It is implemented by the
//! flat store and by mutable prefixed views over it.

use crate::domain::Value;
use crate::ports::ValueSource;

/// A mutable mapping from keys to scalar values.
///
/// Writing an existing key replaces its value.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::domain::Value;
/// use bstkcfg::ports::{ValueSource, ValueStore};
/// use bstkcfg::store::FlatStore;
///
/// fn bump_dpi(store: &mut dyn ValueStore) {
///     let dpi = store.get("dpi").map(Value::to_integer).unwrap_or(240);
///     store.set("dpi", Value::from(dpi + 80));
/// }
///
/// let mut store = FlatStore::new();
/// bump_dpi(&mut store);
/// assert_eq!(store.get("dpi"), Some(&Value::from(320i64)));
/// ```
pub trait ValueStore: ValueSource {
    /// Inserts or replaces the value stored under `key`.
    ///
    /// Implementations may ignore keys they cannot store.
    fn set(&mut self, key: &str, value: Value);

    /// Removes `key`, returning whether it was present.
    fn remove(&mut self, key: &str) -> bool;
}
