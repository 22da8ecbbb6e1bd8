// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schemas: types whose fields are described by a binding table.

use crate::adapters::ScopedStore;
use crate::binding::field::{load_fields, save_fields, FieldBinding};
use crate::domain::Result;
use crate::ports::{ValueSource, ValueStore};

/// A type with a fixed table of field bindings.
///
/// Implementors only list their fields; loading and saving are provided. Use
/// the `*_scoped` methods, or wrap the store in a [`ScopedStore`], to bind the
/// same schema to several prefixes such as one per instance.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::bind_field;
/// use bstkcfg::binding::{FieldBinding, Schema};
/// use bstkcfg::store::FlatStore;
///
/// #[derive(Default)]
/// struct Instance {
///     ram: u32,
///     adb: bool,
/// }
///
/// impl Schema for Instance {
///     fn fields() -> Vec<FieldBinding<Self>> {
///         vec![
///             bind_field!(Instance, "ram", integer, ram),
///             bind_field!(Instance, "enable_adb_access", boolean, adb),
///         ]
///     }
/// }
///
/// let mut store = FlatStore::parse("bst.instance.Pie64.ram=\"4096\"");
/// let mut pie = Instance::default();
/// pie.load_scoped(&store, "bst.instance.Pie64").unwrap();
/// assert_eq!(pie.ram, 4096);
///
/// pie.adb = true;
/// pie.save_scoped(&mut store, "bst.instance.Pie64");
/// assert!(store.has("bst.instance.Pie64.enable_adb_access"));
/// ```
pub trait Schema: Sized {
    /// Returns the binding table for this type.
    fn fields() -> Vec<FieldBinding<Self>>;

    /// Loads every bound key present in `store`, returning how many were found.
    ///
    /// # Errors
    ///
    /// See [`load_fields`].
    fn load_from<V: ValueSource + ?Sized>(&mut self, store: &V) -> Result<usize> {
        load_fields(store, &Self::fields(), self)
    }

    /// Writes every bound field to `store`.
    fn save_to<V: ValueStore + ?Sized>(&self, store: &mut V) {
        save_fields(store, &Self::fields(), self)
    }

    /// Builds a default value and loads it from `store`.
    fn from_store<V: ValueSource + ?Sized>(store: &V) -> Result<Self>
    where
        Self: Default,
    {
        let mut schema = Self::default();
        schema.load_from(store)?;
        Ok(schema)
    }

    /// Loads from the keys under `prefix`.
    ///
    /// # Errors
    ///
    /// See [`load_fields`]. The reported key includes `prefix`.
    fn load_scoped<V: ValueSource + ?Sized>(&mut self, store: &V, prefix: &str) -> Result<usize> {
        let scoped = ScopedStore::new(store, prefix);
        self.load_from(&scoped)
            .map_err(|e| e.with_key_prefix(scoped.prefix()))
    }

    /// Saves under `prefix`.
    fn save_scoped<V: ValueStore + ?Sized>(&self, store: &mut V, prefix: &str) {
        self.save_to(&mut ScopedStore::new(store, prefix))
    }
}
