// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the store, its text format, and the code that binds typed fields.

pub mod parser;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use parser::{ConfigParser, ParsedLine};
pub use source::ValueSource;
pub use store::ValueStore;
