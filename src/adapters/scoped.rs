// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prefixed views over another store.
//!
//! A `ScopedStore` lets code that works with short keys such as `fb_width`
//! operate on `bst.instance.Pie64.fb_width` in the underlying store. Unlike
//! [`FlatStore::get_namespace`](crate::store::FlatStore::get_namespace) it is
//! not a copy: every read goes straight to the wrapped store, and when it
//! wraps a mutable borrow every write does too.

use crate::domain::key::{instance_prefix, normalize_prefix};
use crate::domain::Value;
use crate::ports::{ValueSource, ValueStore};
use std::ops::{Deref, DerefMut};

/// A live view that prepends a fixed prefix to every key.
///
/// The view wraps any pointer to a store. Over a shared borrow it is a
/// read-only [`ValueSource`]; over a mutable borrow it is also a
/// [`ValueStore`].
///
/// # Examples
///
/// ```rust
/// use bstkcfg::adapters::ScopedStore;
/// use bstkcfg::domain::Value;
/// use bstkcfg::ports::{ValueSource, ValueStore};
/// use bstkcfg::store::FlatStore;
///
/// let mut store = FlatStore::new();
/// {
///     let mut pie = ScopedStore::instance(&mut store, "bst", "Pie64");
///     pie.set("dpi", Value::from(240i64));
///     assert!(pie.has("dpi"));
/// }
/// assert_eq!(store.get("bst.instance.Pie64.dpi"), Some(&Value::from(240i64)));
///
/// let pie = ScopedStore::instance(&store, "bst", "Pie64");
/// assert_eq!(pie.get_or("dpi", 160i32).unwrap(), 240);
/// ```
#[derive(Debug)]
pub struct ScopedStore<B> {
    inner: B,
    prefix: String,
}

impl<B> ScopedStore<B> {
    /// Creates a view under `prefix`; a trailing `.` is added when missing.
    pub fn new(inner: B, prefix: &str) -> Self {
        Self {
            prefix: normalize_prefix(prefix).into_owned(),
            inner,
        }
    }

    /// Creates a view over the keys of one named instance under `root`.
    pub fn instance(inner: B, root: &str, name: &str) -> Self {
        Self {
            prefix: instance_prefix(root, name),
            inner,
        }
    }

    /// Returns the prefix (always empty or ending in `.`).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the full key in the underlying store for a scoped key.
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl<B> ScopedStore<B>
where
    B: Deref,
    B::Target: ValueSource,
{
    /// Returns every scoped key, with the prefix stripped.
    ///
    /// The bare prefix itself, if stored, is not included.
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
            .into_iter()
            .filter(|k| !k.is_empty())
            .collect()
    }
}

impl<B> ScopedStore<B>
where
    B: DerefMut,
    B::Target: ValueStore,
{
    /// Removes every key under the prefix, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        for key in self.inner.keys_with_prefix(&self.prefix) {
            if self.inner.remove(&key) {
                removed += 1;
            }
        }
        removed
    }
}

impl<B> ValueSource for ScopedStore<B>
where
    B: Deref,
    B::Target: ValueSource,
{
    fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(&self.full_key(key))
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.inner
            .keys_with_prefix(&self.full_key(prefix))
            .into_iter()
            .map(|k| k[self.prefix.len()..].to_string())
            .collect()
    }
}

impl<B> ValueStore for ScopedStore<B>
where
    B: DerefMut,
    B::Target: ValueStore,
{
    fn set(&mut self, key: &str, value: Value) {
        let full_key = self.full_key(key);
        self.inner.set(&full_key, value);
    }

    fn remove(&mut self, key: &str) -> bool {
        let full_key = self.full_key(key);
        self.inner.remove(&full_key)
    }
}
