//! Directory traversal for modict.
//!
//! Walks a directory tree, selects files by name and path patterns, skips
//! excluded directories, and loads each matched document into a
//! [`DiscoveredModule`](modict_types::DiscoveredModule). The result maps a
//! derived filename to the module it produced.
//!
//! # Key Types
//!
//! - [`IncludeOptions`] -- What to walk and how to name and load files
//! - [`DirFilter`] -- Tri-state directory exclusion (unset, pattern, disabled)
//! - [`DocumentFormat`] -- Supported document formats (JSON, TOML, YAML)
//! - [`include_all`] -- Run a traversal and return its [`Discovery`]

pub mod error;
pub mod loader;
pub mod options;
pub mod walker;

pub use error::{IncludeError, IncludeResult};
pub use loader::{load_document, DocumentFormat};
pub use options::{compile_pattern, DirFilter, IncludeOptions, DEFAULT_EXCLUDE_DIRS};
pub use walker::{include_all, Discovery};
