//! Traversal configuration.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{IncludeError, IncludeResult};

/// Directories excluded when the caller leaves [`DirFilter::Unset`] and the
/// dictionary builder fills in its default.
pub const DEFAULT_EXCLUDE_DIRS: &str = r"^\.(git|svn)$";

/// Compile a filter pattern, keeping the source text for diagnostics.
pub fn compile_pattern(pattern: &str) -> IncludeResult<Regex> {
    Regex::new(pattern).map_err(|source| IncludeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Which directories a traversal skips, matched against the directory name.
#[derive(Clone, Debug, Default)]
pub enum DirFilter {
    /// Nothing chosen yet. A traversal treats this as no exclusion; the
    /// dictionary builder replaces it with [`DEFAULT_EXCLUDE_DIRS`].
    #[default]
    Unset,
    /// Skip directories whose name matches.
    Pattern(Regex),
    /// Explicitly exclude nothing.
    Disabled,
}

impl DirFilter {
    /// The source-control default, `^\.(git|svn)$`.
    pub fn source_control() -> Self {
        Self::Pattern(Regex::new(DEFAULT_EXCLUDE_DIRS).expect("default exclude pattern is valid"))
    }

    /// Returns `true` if no choice has been made.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` if a directory with this name should be skipped.
    pub fn excludes(&self, dir_name: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(dir_name),
            Self::Unset | Self::Disabled => false,
        }
    }
}

/// Options for a single traversal.
#[derive(Clone, Debug)]
pub struct IncludeOptions {
    /// Root directory to scan.
    pub dirname: PathBuf,
    /// Matched against each file name. Capture group 1, when present, is
    /// the derived filename; otherwise the file stem is used.
    pub filter: Option<Regex>,
    /// Matched against the `/`-prefixed path relative to `dirname`. Capture
    /// group 2, when present, overrides the derived filename.
    pub path_filter: Option<Regex>,
    /// Directories to skip.
    pub exclude_dirs: DirFilter,
    /// Maximum directory levels to descend below `dirname`. `None` is
    /// unlimited; `Some(0)` reads only the root.
    pub depth: Option<usize>,
    /// Lift subdirectory members into the parent instead of nesting them.
    pub flatten_directories: bool,
    /// When flattening, prefix keys with the subdirectory path.
    pub keep_directory_path: bool,
    /// Nested directory groups carry `isDirectory: true`.
    pub mark_directories: bool,
    /// Record a placeholder for each matched file instead of loading it.
    pub dont_load: bool,
    /// A missing root yields an empty result instead of an error.
    pub optional: bool,
    /// Follow symbolic links.
    pub follow_links: bool,
}

impl IncludeOptions {
    /// Create options for the given root with everything else at defaults.
    pub fn new(dirname: impl Into<PathBuf>) -> Self {
        Self {
            dirname: dirname.into(),
            filter: None,
            path_filter: None,
            exclude_dirs: DirFilter::Unset,
            depth: None,
            flatten_directories: false,
            keep_directory_path: false,
            mark_directories: false,
            dont_load: false,
            optional: false,
            follow_links: false,
        }
    }

    /// Root directory being scanned.
    pub fn root(&self) -> &Path {
        &self.dirname
    }

    /// Set the filename filter.
    pub fn with_filter(mut self, filter: Regex) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the relative-path filter.
    pub fn with_path_filter(mut self, filter: Regex) -> Self {
        self.path_filter = Some(filter);
        self
    }

    /// Skip directories whose name matches `pattern`.
    pub fn with_exclude_dirs(mut self, pattern: Regex) -> Self {
        self.exclude_dirs = DirFilter::Pattern(pattern);
        self
    }

    /// Exclude no directories, not even source-control ones.
    pub fn without_exclude_dirs(mut self) -> Self {
        self.exclude_dirs = DirFilter::Disabled;
        self
    }

    /// Set the maximum depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Flatten subdirectories, optionally keeping their path in the key.
    pub fn with_flatten_directories(mut self, keep_directory_path: bool) -> Self {
        self.flatten_directories = true;
        self.keep_directory_path = keep_directory_path;
        self
    }

    /// Mark nested directory groups.
    pub fn with_mark_directories(mut self, mark: bool) -> Self {
        self.mark_directories = mark;
        self
    }

    /// Record presence only.
    pub fn with_dont_load(mut self, dont_load: bool) -> Self {
        self.dont_load = dont_load;
        self
    }

    /// Tolerate a missing root directory.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Follow symbolic links.
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}
