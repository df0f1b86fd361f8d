use modict_include::IncludeError;
use modict_types::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("when using `aggregate`, modules must export dictionaries, but module `{filename}` is invalid: {value}")]
    AggregateType { filename: String, value: Value },

    #[error("module `{filename}` cannot carry an identity, expected an object or array: {value}")]
    NotAnObject { filename: String, value: Value },

    #[error("module `{filename}` has a non-string `{field}`: {value}")]
    InvalidIdentity {
        filename: String,
        field: &'static str,
        value: Value,
    },

    #[error("discovery failed: {0}")]
    Discover(#[from] IncludeError),
}

pub type BuildResult<T> = Result<T, BuildError>;
