use modict_include::{include_all, Discovery, IncludeOptions, IncludeResult};

/// Traversal collaborator consulted once per build.
///
/// Implementations must honour the root directory, the filename and
/// directory filters, and `dont_load` (placeholders instead of content).
/// How filenames are derived is entirely up to the implementation.
pub trait Discover {
    /// Walk according to `options` and return every discovered module.
    fn discover(&self, options: &IncludeOptions) -> IncludeResult<Discovery>;
}

/// Filesystem traversal backed by [`include_all`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FsDiscover;

impl Discover for FsDiscover {
    fn discover(&self, options: &IncludeOptions) -> IncludeResult<Discovery> {
        include_all(options)
    }
}

impl<F> Discover for F
where
    F: Fn(&IncludeOptions) -> IncludeResult<Discovery>,
{
    fn discover(&self, options: &IncludeOptions) -> IncludeResult<Discovery> {
        self(options)
    }
}
