//! Foundation types for modict.
//!
//! This crate provides the value types shared by the traversal layer
//! (`modict-include`) and the dictionary builder (`modict`).
//!
//! # Key Types
//!
//! - [`DiscoveredModule`] -- What a traversal produced for one matched file
//! - [`Dictionary`] -- The built key-value dictionary handed to callers
//! - [`deep_merge`] -- Recursive object merge with last-write-wins on scalars

pub mod dictionary;
pub mod merge;
pub mod module;

pub use dictionary::Dictionary;
pub use merge::{deep_merge, merge_value};
pub use module::DiscoveredModule;

/// Re-exported so downstream crates share one structured-value representation.
pub use serde_json::{Map, Value};
