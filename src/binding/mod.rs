// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binding layer mapping typed struct fields to store keys.
//!
//! This module contains the field descriptor table used to load a struct from
//! any `ValueSource` and save it back to any `ValueStore`, and the `Schema` trait built on it.

pub mod field;
pub mod schema;

// Re-export commonly used types
pub use field::{load_fields, save_fields, FieldBinding, FieldKind};
pub use schema::Schema;
