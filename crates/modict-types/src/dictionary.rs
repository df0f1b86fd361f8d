//! The dictionary handed back to callers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merge::deep_merge;

/// A built module dictionary.
///
/// In index mode each entry is one module keyed by its derived name. In
/// aggregate mode the dictionary is itself the deep-merged object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: Map<String, Value>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning whatever it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Deep-merge an object into the dictionary.
    pub fn merge_object(&mut self, object: Map<String, Value>) {
        deep_merge(&mut self.entries, object);
    }

    /// Iterate over keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Iterate over entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Consume the dictionary, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }

    /// Consume the dictionary, returning it as a single JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

impl From<Map<String, Value>> for Dictionary {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
