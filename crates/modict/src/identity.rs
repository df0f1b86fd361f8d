//! Identity inference for indexed modules.
//!
//! A module keeps any `identity` or `globalId` it already declares. Missing
//! ones are derived from the filename, then `identity` is lower-cased in
//! place. `globalId` keeps the casing `identity` had before that.

use modict_types::{Map, Value};
use regex::Regex;

use crate::error::{BuildError, BuildResult};
use crate::options::BuildOptions;

pub const IDENTITY: &str = "identity";
pub const GLOBAL_ID: &str = "globalId";

/// Naming rules for one build.
#[derive(Clone, Copy, Debug)]
pub struct IdentityPolicy<'a> {
    replace_expr: Option<&'a Regex>,
    replace_val: &'a str,
    use_global_id: bool,
}

impl<'a> IdentityPolicy<'a> {
    pub fn new(replace_expr: Option<&'a Regex>, replace_val: &'a str, use_global_id: bool) -> Self {
        Self {
            replace_expr,
            replace_val,
            use_global_id,
        }
    }

    pub fn from_options(options: &'a BuildOptions) -> Self {
        Self::new(
            options.replace_expr.as_ref(),
            options.replace_val.as_deref().unwrap_or(""),
            options.use_global_id_for_key_name,
        )
    }

    /// Identity derived from a filename, before lower-casing.
    pub fn infer(&self, filename: &str) -> String {
        match self.replace_expr {
            Some(expr) => expr.replace(filename, self.replace_val).into_owned(),
            None => filename.to_string(),
        }
    }

    /// Stamp `identity` and `globalId` onto `module` and return its key.
    pub fn stamp(&self, filename: &str, module: &mut Map<String, Value>) -> BuildResult<String> {
        let identity = match declared_identity(module, filename)? {
            Some(identity) => identity,
            None => self.infer(filename),
        };

        let declared_global_id = module.get(GLOBAL_ID).filter(|v| is_truthy(v)).map(key_text);
        let global_id = match declared_global_id {
            Some(global_id) => global_id,
            None => {
                module.insert(GLOBAL_ID.to_string(), Value::String(identity.clone()));
                identity.clone()
            }
        };

        let identity = identity.to_lowercase();
        module.insert(IDENTITY.to_string(), Value::String(identity.clone()));

        Ok(self.key(identity, global_id))
    }

    /// Key for a module that cannot carry fields.
    pub fn bare_key(&self, filename: &str) -> String {
        let global_id = self.infer(filename);
        self.key(global_id.to_lowercase(), global_id)
    }

    fn key(&self, identity: String, global_id: String) -> String {
        if self.use_global_id {
            global_id
        } else {
            identity
        }
    }
}

/// The identity a module declares itself. It is lower-cased later, so it
/// must be a string.
fn declared_identity(module: &Map<String, Value>, filename: &str) -> BuildResult<Option<String>> {
    match module.get(IDENTITY).filter(|v| is_truthy(v)) {
        None => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.clone())),
        Some(other) => Err(BuildError::InvalidIdentity {
            filename: filename.to_string(),
            field: IDENTITY,
            value: other.clone(),
        }),
    }
}

/// Missing, `null`, `false`, `""` and `0` count as undeclared.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        _ => true,
    }
}

/// Dictionary key text for a declared value of any type.
///
/// Strings are used as-is, arrays join their elements with `,` and objects
/// collapse to `[object Object]`, the way the value would be stringified
/// when used as a property name.
fn key_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(key_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
