// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the scalar value model and key conventions.
//!
//! This module is independent of any file format or storage concern and
//! defines the fundamental types used throughout the library.

pub mod errors;
pub mod escape;
pub mod key;
pub mod value;

// Re-export commonly used types
pub use errors::{ConfigError, Result};
pub use value::{FromValue, Value};
