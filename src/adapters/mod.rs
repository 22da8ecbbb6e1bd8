// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the concrete line-format parser implementing
//! `ConfigParser` and the prefixed store view implementing `ValueSource` and
//! `ValueStore`.

pub mod line_format;
pub mod scoped;

// Re-export adapters
pub use line_format::KeyValueParser;
pub use scoped::ScopedStore;
