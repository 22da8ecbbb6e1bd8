// SPDX-License-Identifier: MIT OR Apache-2.0

//! A flat, typed key/value configuration store.
//!
//! This crate reads and writes configuration documents made of `KEY="VALUE"`
//! lines, keeps the entries in memory with inferred scalar types, and binds
//! them to typed struct fields.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and key conventions (`Value`, escaping, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`, `ValueSource`, `ValueStore`)
//! - **Adapters**: The line-format parser and the prefixed `ScopedStore` view
//! - **Store**: `FlatStore`, the ordered in-memory store with file load and save
//! - **Binding**: Field descriptor tables and the `Schema` trait
//!
//! # Features
//!
//! - **Type Inference**: `1`/`true` read as booleans, digit runs as integers, `x.y` as reals
//! - **Lossy Coercions**: Any value can be read as text, integer, real, or boolean
//! - **Stable Output**: Documents are written sorted, with blank lines between groups
//! - **Namespaces**: Prefix queries, per-instance views, and instance discovery
//! - **Typed Binding**: Load and save struct fields through a declarative table
//!
//! # Feature Flags
//!
//! - `serde`: Derive `Serialize`/`Deserialize` for `Value` and `FlatStore` (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bstkcfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut store = FlatStore::new();
//! store.try_load_file("bluestacks.conf")?;
//!
//! let ram: i64 = store.get_as("bst.system_ram")?.unwrap_or(4096);
//! store.set("bst.enable_adb_access", true);
//! store.try_save_file("bluestacks.conf")?;
//! # let _ = ram;
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! Binding a struct to the keys of one instance:
//!
//! ```rust
//! use bstkcfg::bind_field;
//! use bstkcfg::prelude::*;
//!
//! #[derive(Default)]
//! struct Instance {
//!     fb_width: i32,
//!     fb_height: i32,
//! }
//!
//! impl Schema for Instance {
//!     fn fields() -> Vec<FieldBinding<Self>> {
//!         vec![
//!             bind_field!(Instance, "fb_width", integer, fb_width),
//!             bind_field!(Instance, "fb_height", integer, fb_height),
//!         ]
//!     }
//! }
//!
//! let store = FlatStore::parse(
//!     "bst.instance.Pie64.fb_width=\"1280\"\nbst.instance.Pie64.fb_height=\"720\"",
//! );
//!
//! let mut pie = Instance::default();
//! pie.load_scoped(&store, "bst.instance.Pie64").unwrap();
//! assert_eq!((pie.fb_width, pie.fb_height), (1280, 720));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod binding;
pub mod domain;
pub mod ports;
pub mod store;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{KeyValueParser, ScopedStore};
    pub use crate::binding::{load_fields, save_fields, FieldBinding, FieldKind, Schema};
    pub use crate::domain::{ConfigError, FromValue, Result, Value};
    pub use crate::ports::{ConfigParser, ParsedLine, ValueSource, ValueStore};
    pub use crate::store::FlatStore;
}
