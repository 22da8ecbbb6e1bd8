// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field descriptors binding typed struct fields to store keys.
//!
//! A schema is described by a table of [`FieldBinding`]s, one per field. Each
//! binding pairs a key with a getter and setter for one field of a fixed
//! [`FieldKind`]. The table is processed by [`load_fields`] and
//! [`save_fields`], so schemas themselves stay plain data.

use crate::domain::{ConfigError, Result, Value};
use crate::ports::{ValueSource, ValueStore};
use std::borrow::Cow;
use std::fmt;

/// The static kind of a bound field, selecting the coercion used on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `String` fields, loaded with [`Value::to_text`].
    Text,
    /// `bool` fields, loaded with [`Value::to_boolean`].
    Boolean,
    /// Integer fields of any width, loaded with [`Value::to_integer`].
    Integer,
    /// Floating point fields, loaded with [`Value::to_real`].
    Real,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Real => "real",
        };
        f.write_str(name)
    }
}

enum Accessor<S> {
    Text {
        get: fn(&S) -> String,
        set: fn(&mut S, String),
    },
    Boolean {
        get: fn(&S) -> bool,
        set: fn(&mut S, bool),
    },
    Integer {
        get: fn(&S) -> i64,
        set: fn(&mut S, i64),
    },
    Real {
        get: fn(&S) -> f64,
        set: fn(&mut S, f64),
    },
}

// fn pointers are Copy whatever `S` is, so derive's `S: Clone` bound is unwanted
impl<S> Clone for Accessor<S> {
    fn clone(&self) -> Self {
        match *self {
            Accessor::Text { get, set } => Accessor::Text { get, set },
            Accessor::Boolean { get, set } => Accessor::Boolean { get, set },
            Accessor::Integer { get, set } => Accessor::Integer { get, set },
            Accessor::Real { get, set } => Accessor::Real { get, set },
        }
    }
}

/// Binds one field of schema `S` to a key.
///
/// Integer and real accessors work on `i64`/`f64`; narrowing to the field's
/// own width happens in the setter. The [`bind_field!`](crate::bind_field)
/// macro writes both accessors for a field path.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::binding::{FieldBinding, FieldKind};
/// use bstkcfg::store::FlatStore;
///
/// #[derive(Default)]
/// struct Display {
///     dpi: i32,
/// }
///
/// let dpi = FieldBinding::<Display>::integer("dpi", |d| d.dpi as i64, |d, v| d.dpi = v as i32);
/// assert_eq!(dpi.kind(), FieldKind::Integer);
///
/// let store = FlatStore::parse("dpi=\"320\"");
/// let mut display = Display::default();
/// assert!(dpi.load(&store, &mut display).unwrap());
/// assert_eq!(display.dpi, 320);
/// ```
pub struct FieldBinding<S> {
    key: Cow<'static, str>,
    accessor: Accessor<S>,
}

impl<S> FieldBinding<S> {
    /// Binds a `String` field.
    pub fn text(
        key: impl Into<Cow<'static, str>>,
        get: fn(&S) -> String,
        set: fn(&mut S, String),
    ) -> Self {
        Self {
            key: key.into(),
            accessor: Accessor::Text { get, set },
        }
    }

    /// Binds a `bool` field.
    pub fn boolean(
        key: impl Into<Cow<'static, str>>,
        get: fn(&S) -> bool,
        set: fn(&mut S, bool),
    ) -> Self {
        Self {
            key: key.into(),
            accessor: Accessor::Boolean { get, set },
        }
    }

    /// Binds an integer field through `i64`.
    pub fn integer(
        key: impl Into<Cow<'static, str>>,
        get: fn(&S) -> i64,
        set: fn(&mut S, i64),
    ) -> Self {
        Self {
            key: key.into(),
            accessor: Accessor::Integer { get, set },
        }
    }

    /// Binds a floating point field through `f64`.
    pub fn real(
        key: impl Into<Cow<'static, str>>,
        get: fn(&S) -> f64,
        set: fn(&mut S, f64),
    ) -> Self {
        Self {
            key: key.into(),
            accessor: Accessor::Real { get, set },
        }
    }

    /// Returns the bound key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the kind of the bound field.
    pub fn kind(&self) -> FieldKind {
        match self.accessor {
            Accessor::Text { .. } => FieldKind::Text,
            Accessor::Boolean { .. } => FieldKind::Boolean,
            Accessor::Integer { .. } => FieldKind::Integer,
            Accessor::Real { .. } => FieldKind::Real,
        }
    }

    /// Copies the stored value into the field.
    ///
    /// Returns `Ok(false)` and leaves the field untouched when the key is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeConversionError`] when a real field is bound
    /// to text that is not a floating point literal.
    pub fn load<V: ValueSource + ?Sized>(&self, store: &V, target: &mut S) -> Result<bool> {
        let Some(value) = store.get(&self.key) else {
            return Ok(false);
        };

        match self.accessor {
            Accessor::Text { set, .. } => set(target, value.to_text()),
            Accessor::Boolean { set, .. } => set(target, value.to_boolean()),
            Accessor::Integer { set, .. } => set(target, value.to_integer()),
            Accessor::Real { set, .. } => {
                let real = value
                    .to_real()
                    .map_err(|e| ConfigError::conversion(self.key.as_ref(), "real", e))?;
                set(target, real)
            }
        }
        Ok(true)
    }

    /// Writes the field's current value under the bound key.
    ///
    /// The key is always written, even when the field holds its default.
    pub fn save<V: ValueStore + ?Sized>(&self, store: &mut V, source: &S) {
        let value = match self.accessor {
            Accessor::Text { get, .. } => Value::Text(get(source)),
            Accessor::Boolean { get, .. } => Value::Boolean(get(source)),
            Accessor::Integer { get, .. } => Value::Integer(get(source)),
            Accessor::Real { get, .. } => Value::Real(get(source)),
        };
        store.set(&self.key, value);
    }
}

impl<S> Clone for FieldBinding<S> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<S> fmt::Debug for FieldBinding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("key", &self.key)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Loads every bound field present in `store` into `target`.
///
/// Fields whose key is absent keep their current value. Returns the number of
/// fields that were loaded.
///
/// # Errors
///
/// Stops at the first real field whose text cannot be parsed; fields earlier
/// in the table have already been updated.
pub fn load_fields<S, V: ValueSource + ?Sized>(
    store: &V,
    fields: &[FieldBinding<S>],
    target: &mut S,
) -> Result<usize> {
    let mut loaded = 0;
    for field in fields {
        if field.load(store, target)? {
            loaded += 1;
        }
    }
    Ok(loaded)
}

/// Writes every bound field of `source` into `store`.
pub fn save_fields<S, V: ValueStore + ?Sized>(
    store: &mut V,
    fields: &[FieldBinding<S>],
    source: &S,
) {
    for field in fields {
        field.save(store, source);
    }
}

/// Builds a [`FieldBinding`] for a (possibly nested) field of a schema type.
///
/// The kind is one of `text`, `boolean`, `integer` or `real`. Integer and real
/// fields of any primitive width are converted with `as`.
///
/// # Examples
///
/// ```rust
/// use bstkcfg::bind_field;
/// use bstkcfg::binding::{load_fields, save_fields, FieldBinding};
/// use bstkcfg::store::FlatStore;
///
/// #[derive(Default)]
/// struct Graphics {
///     renderer: String,
///     vulkan: bool,
/// }
///
/// #[derive(Default)]
/// struct Instance {
///     cpus: u8,
///     scale: f32,
///     graphics: Graphics,
/// }
///
/// let fields: Vec<FieldBinding<Instance>> = vec![
///     bind_field!(Instance, "cpus", integer, cpus),
///     bind_field!(Instance, "scale", real, scale),
///     bind_field!(Instance, "graphics_renderer", text, graphics.renderer),
///     bind_field!(Instance, "vulkan_supported", boolean, graphics.vulkan),
/// ];
///
/// let store = FlatStore::parse("cpus=4\nscale=1.5\ngraphics_renderer=\"vlcn\"\nvulkan_supported=1");
/// let mut instance = Instance::default();
/// load_fields(&store, &fields, &mut instance).unwrap();
/// assert_eq!(instance.cpus, 4);
/// assert_eq!(instance.scale, 1.5);
/// assert_eq!(instance.graphics.renderer, "vlcn");
/// assert!(instance.graphics.vulkan);
///
/// let mut out = FlatStore::new();
/// save_fields(&mut out, &fields, &instance);
/// assert_eq!(out.len(), 4);
/// ```
#[macro_export]
macro_rules! bind_field {
    ($schema:ty, $key:expr, text, $($field:ident).+) => {
        $crate::binding::FieldBinding::<$schema>::text(
            $key,
            |s| s.$($field).+.clone(),
            |s, v| s.$($field).+ = v,
        )
    };
    ($schema:ty, $key:expr, boolean, $($field:ident).+) => {
        $crate::binding::FieldBinding::<$schema>::boolean(
            $key,
            |s| s.$($field).+,
            |s, v| s.$($field).+ = v,
        )
    };
    ($schema:ty, $key:expr, integer, $($field:ident).+) => {
        $crate::binding::FieldBinding::<$schema>::integer(
            $key,
            |s| s.$($field).+ as i64,
            |s, v| s.$($field).+ = v as _,
        )
    };
    ($schema:ty, $key:expr, real, $($field:ident).+) => {
        $crate::binding::FieldBinding::<$schema>::real(
            $key,
            |s| s.$($field).+ as f64,
            |s, v| s.$($field).+ = v as _,
        )
    };
}
