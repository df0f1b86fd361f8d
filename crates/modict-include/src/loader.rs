//! Document loading by file extension.

use std::fs;
use std::path::Path;

use modict_types::{DiscoveredModule, Map, Value};
use tracing::debug;

use crate::error::{IncludeError, IncludeResult};

/// A document format the loader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse document text into a structured value.
    pub fn parse(self, text: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str::<toml::Table>(text)
                .map(|table| toml_to_json(toml::Value::Table(table)))
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// TOML datetimes become their RFC 3339 text; non-finite floats become `null`.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Load one file into a [`DiscoveredModule`].
///
/// - Unsupported extensions are [`DiscoveredModule::Absent`].
/// - Blank files export an empty object.
/// - A top-level `null` is `Absent`.
pub fn load_document(path: &Path) -> IncludeResult<DiscoveredModule> {
    let Some(format) = DocumentFormat::from_path(path) else {
        debug!(path = %path.display(), "unsupported document format");
        return Ok(DiscoveredModule::Absent);
    };

    let text = fs::read_to_string(path).map_err(|source| IncludeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Ok(DiscoveredModule::Object(Map::new()));
    }

    let value = format.parse(&text).map_err(|reason| IncludeError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(DiscoveredModule::from(value))
}
