// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat key-value configuration store.
//!
//! This module provides `FlatStore`, an in-memory map from dot-separated keys to
//! scalar values that loads from and serializes to the `KEY="VALUE"` line
//! format.

use crate::adapters::KeyValueParser;
use crate::domain::key::{is_storable_key, normalize_prefix, split_instance, top_level_segment};
use crate::domain::{ConfigError, Result, Value};
use crate::ports::{ConfigParser, ValueSource, ValueStore};
use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// An in-memory, flat configuration store.
///
/// Keys are unique; setting an existing key replaces its value in place.
/// Iteration follows insertion order, while the serialized document is always
/// sorted by key and grouped by top-level namespace.
///
/// The store has no internal locking. Mutation requires `&mut self`, so sharing
/// a store between threads needs an external lock.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::domain::Value;
/// use bstkcfg::store::FlatStore;
///
/// let mut store = FlatStore::parse("bst.country=\"US\"\nbst.system_ram=16384\n");
/// store.set("bst.locale", "en-US");
///
/// assert_eq!(store.get("bst.system_ram"), Some(&Value::Integer(16384)));
/// assert_eq!(
///     store.to_string(),
///     "bst.country=\"US\"\nbst.locale=\"en-US\"\nbst.system_ram=\"16384\"\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlatStore {
    /// Entries in insertion order
    entries: IndexMap<String, Value>,
}

impl FlatStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Creates a store from a document in the line format.
    ///
    /// Malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut store = Self::new();
        store.load(content);
        store
    }

    /// Replaces the contents of the store with the entries of `content`.
    ///
    /// Lines that are blank, comments, or lack an `=` are skipped without
    /// any error. Later duplicates of a key overwrite earlier ones.
    pub fn load(&mut self, content: &str) {
        self.load_with(&KeyValueParser::new(), content);
    }

    /// Like [`FlatStore::load`] but with a custom line parser.
    pub fn load_with<P: ConfigParser + ?Sized>(&mut self, parser: &P, content: &str) {
        self.clear();
        self.extend(parser.parse(content));
        tracing::trace!("Loaded {} configuration entries", self.entries.len());
    }

    /// Reads and loads a configuration file.
    ///
    /// The store is only cleared once the whole file has been read; on error
    /// it is left untouched. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD instead of failing the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileError`] if the file cannot be read.
    pub fn try_load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ConfigError::read_failed(path, e))?;
        self.load(&String::from_utf8_lossy(&bytes));
        tracing::debug!(
            "Loaded {} entries from '{}'",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads and loads a configuration file, reporting success as a boolean.
    ///
    /// See [`FlatStore::try_load_file`] for the error-returning variant.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        match self.try_load_file(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("{}", e);
                false
            }
        }
    }

    /// Writes the serialized store to a file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileError`] if the file cannot be written.
    pub fn try_save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| ConfigError::write_failed(path, e))?;
        tracing::debug!(
            "Saved {} entries to '{}'",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Writes the serialized store to a file, reporting success as a boolean.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> bool {
        match self.try_save_file(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("{}", e);
                false
            }
        }
    }

    /// Serializes the store with a custom line parser's entry format.
    ///
    /// Entries are sorted by key. A blank line separates runs of dotted keys
    /// with different top-level segments; undotted keys do not affect grouping.
    pub fn to_document_with<P: ConfigParser + ?Sized>(&self, parser: &P) -> String {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut document = String::new();
        let mut last_segment = "";
        for (key, value) in entries {
            if let Some(segment) = top_level_segment(key) {
                if !last_segment.is_empty() && segment != last_segment {
                    document.push('\n');
                }
                last_segment = segment;
            }
            document.push_str(&parser.format_entry(key, value));
            document.push('\n');
        }
        document
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces the value under `key`.
    ///
    /// A replaced key keeps its position in iteration order. Keys are written
    /// to documents unescaped, so a key that would not read back (see
    /// [`is_storable_key`]) is ignored and nothing is stored.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.insert(key.into(), value.into());
    }

    fn insert(&mut self, key: String, value: Value) {
        if !is_storable_key(&key) {
            tracing::debug!("Ignoring unstorable configuration key {:?}", key);
            return;
        }
        self.entries.insert(key, value);
    }

    /// Stores a text value.
    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Value::Text(value.into()));
    }

    /// Stores an integer value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, Value::Integer(value));
    }

    /// Stores a real value.
    pub fn set_real(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, Value::Real(value));
    }

    /// Stores a boolean value.
    pub fn set_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, Value::Boolean(value));
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns every key whose leading bytes equal `prefix`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstkcfg::store::FlatStore;
    ///
    /// let store = FlatStore::parse("bst.io=1\nbst.instance.Pie64.dpi=240\nother=x");
    /// assert_eq!(store.keys_with_prefix("bst.i"), vec!["bst.io", "bst.instance.Pie64.dpi"]);
    /// assert_eq!(store.keys_with_prefix("").len(), 3);
    /// assert!(store.keys_with_prefix("zzz").is_empty());
    /// ```
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Removes every key matched by [`FlatStore::keys_with_prefix`].
    ///
    /// Returns the number of removed entries.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, _| !k.starts_with(prefix));
        before - self.entries.len()
    }

    /// Copies every entry under `prefix` into a new store, prefix stripped.
    ///
    /// A `.` is appended to a non-empty prefix that lacks one. A key equal to
    /// the prefix itself is not copied. The result is an independent snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstkcfg::domain::Value;
    /// use bstkcfg::store::FlatStore;
    ///
    /// let store = FlatStore::parse("a.b.c=\"v1\"\na.b.d=\"v2\"\nx.y=\"v3\"");
    /// let ns = store.get_namespace("a.b");
    /// assert_eq!(ns.len(), 2);
    /// assert_eq!(ns.get("c"), Some(&Value::from("v1")));
    /// assert_eq!(ns.get("d"), Some(&Value::from("v2")));
    /// ```
    pub fn get_namespace(&self, prefix: &str) -> FlatStore {
        let prefix = normalize_prefix(prefix);
        self.entries
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(prefix.as_ref())
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest.to_string(), v.clone()))
            })
            .collect()
    }

    /// Returns the distinct instance names found in keys, in first-seen order.
    ///
    /// An instance name is the path segment after an `instance.` segment, as
    /// in `bst.instance.<name>.fb_width`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstkcfg::store::FlatStore;
    ///
    /// let store = FlatStore::parse(
    ///     "bst.instance.Pie64.dpi=240\nbst.instance.Rvc64.dpi=320\nbst.instance.Pie64.ram=4096",
    /// );
    /// assert_eq!(store.instance_names(), vec!["Pie64", "Rvc64"]);
    /// ```
    pub fn instance_names(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter_map(|k| split_instance(k))
            .map(|(name, _)| name)
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Copies the settings of one instance into a new store, keyed by the part
    /// after `instance.<name>.`.
    pub fn instance_config(&self, name: &str) -> FlatStore {
        self.entries
            .iter()
            .filter_map(|(k, v)| match split_instance(k) {
                Some((n, rest)) if n == name && !rest.is_empty() => {
                    Some((rest.to_string(), v.clone()))
                }
                _ => None,
            })
            .collect()
    }
}

impl ValueSource for FlatStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        FlatStore::keys_with_prefix(self, prefix)
    }

    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl ValueStore for FlatStore {
    fn set(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> bool {
        self.entries.shift_remove(key).is_some()
    }
}

/// Serializes the store in the `KEY="VALUE"` line format.
impl fmt::Display for FlatStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_document_with(&KeyValueParser::new()))
    }
}

impl FromStr for FlatStore {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FlatStore::parse(s))
    }
}

impl FromIterator<(String, Value)> for FlatStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<(String, Value)> for FlatStore {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a FlatStore {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
