//! Recursive deep merge over structured values.
//!
//! Nested objects are combined field by field. Every other conflict,
//! arrays included, resolves to the incoming value.

use serde_json::{Map, Value};

/// Merge `source` into `target` in place.
pub fn deep_merge(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, incoming),
            None => {
                target.insert(key, incoming);
            }
        }
    }
}

/// Merge a single value into an existing slot.
pub fn merge_value(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Object(existing), Value::Object(incoming)) => deep_merge(existing, incoming),
        (slot, incoming) => *slot = incoming,
    }
}
