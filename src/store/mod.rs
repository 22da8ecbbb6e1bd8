// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store layer containing the in-memory configuration store.
//!
//! This module contains `FlatStore`, which owns every entry, loads and saves
//! whole documents, and answers prefix and namespace queries.

pub mod flat_store;

// Re-export commonly used types
pub use flat_store::FlatStore;
