//! The dictionary builder.
//!
//! One traversal, then one pass over its results. In aggregate mode every
//! module is deep-merged into a single object; otherwise each module becomes
//! one entry keyed by its identity (or raw filename when inference is off).

use modict_include::Discovery;
use modict_types::{Dictionary, DiscoveredModule, Value};
use tracing::{debug, info};

use crate::discover::{Discover, FsDiscover};
use crate::error::{BuildError, BuildResult};
use crate::identity::IdentityPolicy;
use crate::options::BuildOptions;

/// Builds dictionaries using a traversal collaborator.
#[derive(Clone, Debug, Default)]
pub struct DictionaryBuilder<D = FsDiscover> {
    discover: D,
}

impl DictionaryBuilder<FsDiscover> {
    /// A builder that walks the real filesystem.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Discover> DictionaryBuilder<D> {
    /// A builder backed by a custom traversal.
    pub fn with_discover(discover: D) -> Self {
        Self { discover }
    }

    /// Run a traversal and build the dictionary.
    ///
    /// No partial dictionary is ever returned alongside an error.
    pub fn build(&self, options: BuildOptions) -> BuildResult<Dictionary> {
        let options = options.with_defaults();
        let discovery = self.discover.discover(&options.include)?;
        debug!(dir = %options.include.dirname.display(), found = discovery.len(), "discovered modules");

        let dictionary = if options.aggregate {
            aggregate(discovery)?
        } else {
            index(discovery, &options)?
        };

        info!(
            dir = %options.include.dirname.display(),
            aggregate = options.aggregate,
            entries = dictionary.len(),
            "dictionary built"
        );
        Ok(dictionary)
    }

    /// Build and hand the outcome to `callback`, which runs exactly once.
    pub fn build_with<F, R>(&self, options: BuildOptions, callback: F) -> R
    where
        F: FnOnce(BuildResult<Dictionary>) -> R,
    {
        callback(self.build(options))
    }
}

fn aggregate(discovery: Discovery) -> BuildResult<Dictionary> {
    let mut dictionary = Dictionary::new();
    for (filename, module) in discovery {
        match module {
            DiscoveredModule::Object(object) => dictionary.merge_object(object),
            other => {
                return Err(BuildError::AggregateType {
                    filename,
                    value: other.into_value().unwrap_or_default(),
                });
            }
        }
    }
    Ok(dictionary)
}

fn index(discovery: Discovery, options: &BuildOptions) -> BuildResult<Dictionary> {
    let policy = IdentityPolicy::from_options(options);
    let infer = options.infers_identity();
    let mut dictionary = Dictionary::new();

    for (filename, module) in discovery {
        let (key, value) = match module {
            DiscoveredModule::Absent => {
                debug!(filename = %filename, "skipping module with no value");
                continue;
            }
            DiscoveredModule::Object(mut object) if infer => {
                let key = policy.stamp(&filename, &mut object)?;
                (key, Value::Object(object))
            }
            DiscoveredModule::Opaque(array @ Value::Array(_)) if infer => (policy.bare_key(&filename), array),
            other if infer => {
                return Err(BuildError::NotAnObject {
                    filename,
                    value: other.into_value().unwrap_or_default(),
                });
            }
            other => (filename, other.into_value().unwrap_or_default()),
        };

        if dictionary.insert(key.clone(), value).is_some() {
            debug!(key = %key, "replaced earlier module with the same key");
        }
    }

    Ok(dictionary)
}
