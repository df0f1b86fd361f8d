//! Build module dictionaries from directory trees.
//!
//! A traversal discovers one module per matching file. The builder then
//! either deep-merges every module into a single configuration object
//! (aggregate mode) or indexes each module under a key derived from its
//! filename (index mode), stamping `identity` and `globalId` onto it.
//!
//! ```no_run
//! use modict::{optional, BuildOptions};
//! use modict_include::compile_pattern;
//!
//! let controllers = optional(
//!     BuildOptions::new("api/controllers")
//!         .with_filter(compile_pattern(r"(.+)Controller\.json$")?),
//! )?;
//! for (identity, controller) in controllers.iter() {
//!     println!("{identity}: {controller}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod builder;
pub mod discover;
pub mod error;
pub mod identity;
pub mod options;

pub use api::{
    aggregate, aggregate_with, build_dictionary, build_dictionary_with, exists, exists_with,
    optional, optional_with, required, required_with,
};
pub use builder::DictionaryBuilder;
pub use discover::{Discover, FsDiscover};
pub use error::{BuildError, BuildResult};
pub use identity::IdentityPolicy;
pub use options::BuildOptions;

// Re-export key types
pub use modict_include::{DirFilter, IncludeOptions};
pub use modict_types::{Dictionary, DiscoveredModule};
