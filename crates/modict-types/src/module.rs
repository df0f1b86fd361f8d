//! The value a traversal produces for one matched file.

use serde_json::{Map, Value};

/// A discovered module, as returned by a traversal.
///
/// Traversals never hand back raw `Value`s: the variant tells the builder
/// what it is allowed to do with the value (stamp identity fields, merge it,
/// or drop it).
#[derive(Clone, Debug, PartialEq)]
pub enum DiscoveredModule {
    /// A structured key-value document.
    Object(Map<String, Value>),
    /// Any other loaded value: array, string, number, or boolean.
    Opaque(Value),
    /// Presence marker recorded instead of content when loading is disabled.
    Placeholder,
    /// The file matched but produced nothing usable.
    Absent,
}

impl DiscoveredModule {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Opaque(value) => value_kind(value),
            Self::Placeholder => "placeholder",
            Self::Absent => "absent",
        }
    }

    /// Returns `true` if this module should be excluded from a dictionary.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this module is a structured key-value document.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Convert into the value stored in a dictionary.
    ///
    /// Placeholders become `true`; `Absent` has no value.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Object(map) => Some(Value::Object(map)),
            Self::Opaque(value) => Some(value),
            Self::Placeholder => Some(Value::Bool(true)),
            Self::Absent => None,
        }
    }
}

impl From<Value> for DiscoveredModule {
    /// Classify a loaded document. A top-level `null` counts as absent.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::Null => Self::Absent,
            other => Self::Opaque(other),
        }
    }
}

impl From<Map<String, Value>> for DiscoveredModule {
    fn from(map: Map<String, Value>) -> Self {
        Self::Object(map)
    }
}

/// JSON type name of a value.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
