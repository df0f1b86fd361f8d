//! Dictionary build options.

use std::path::PathBuf;

use modict_include::{DirFilter, IncludeOptions};
use regex::Regex;

/// Options for one dictionary build.
///
/// Traversal settings live in [`IncludeOptions`]; the rest controls how
/// discovered modules are named and combined.
#[derive(Clone, Debug)]
pub struct BuildOptions {
    /// Passed to the traversal collaborator.
    pub include: IncludeOptions,
    /// Deep-merge every module into one object instead of indexing them.
    pub aggregate: bool,
    /// Infer `identity` and `globalId` for each module.
    pub identity: bool,
    /// Key entries by `globalId` rather than `identity`.
    pub use_global_id_for_key_name: bool,
    /// Pattern whose first match in the filename is replaced to form the identity.
    pub replace_expr: Option<Regex>,
    /// Replacement text for `replace_expr`. Defaults to `""` at build time.
    pub replace_val: Option<String>,
}

impl BuildOptions {
    /// Options for the given root directory.
    pub fn new(dirname: impl Into<PathBuf>) -> Self {
        Self::from_include(IncludeOptions::new(dirname))
    }

    /// Wrap existing traversal options.
    pub fn from_include(include: IncludeOptions) -> Self {
        Self {
            include,
            aggregate: false,
            identity: true,
            use_global_id_for_key_name: false,
            replace_expr: None,
            replace_val: None,
        }
    }

    /// Fill in unset defaults: an empty replacement and the source-control
    /// directory exclusion. An explicitly disabled exclusion is kept.
    pub fn with_defaults(mut self) -> Self {
        if self.replace_val.is_none() {
            self.replace_val = Some(String::new());
        }
        if self.include.exclude_dirs.is_unset() {
            self.include.exclude_dirs = DirFilter::source_control();
        }
        self
    }

    /// Whether identity inference applies to this build.
    pub fn infers_identity(&self) -> bool {
        !self.include.dont_load && self.identity
    }

    pub fn with_filter(mut self, filter: Regex) -> Self {
        self.include.filter = Some(filter);
        self
    }

    pub fn with_exclude_dirs(mut self, pattern: Regex) -> Self {
        self.include.exclude_dirs = DirFilter::Pattern(pattern);
        self
    }

    pub fn without_exclude_dirs(mut self) -> Self {
        self.include.exclude_dirs = DirFilter::Disabled;
        self
    }

    pub fn with_aggregate(mut self, aggregate: bool) -> Self {
        self.aggregate = aggregate;
        self
    }

    pub fn with_identity(mut self, identity: bool) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_dont_load(mut self, dont_load: bool) -> Self {
        self.include.dont_load = dont_load;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.include.optional = optional;
        self
    }

    pub fn with_global_id_keys(mut self, use_global_id: bool) -> Self {
        self.use_global_id_for_key_name = use_global_id;
        self
    }

    /// Derive identities by replacing the first match of `expr` with `val`.
    pub fn with_replace(mut self, expr: Regex, val: impl Into<String>) -> Self {
        self.replace_expr = Some(expr);
        self.replace_val = Some(val.into());
        self
    }

    pub fn with_replace_expr(mut self, expr: Regex) -> Self {
        self.replace_expr = Some(expr);
        self
    }
}
