//! The data record supplying substitution values.

use serde_json::Value;

/// Read-only data record for one render call.
///
/// A thin wrapper over JSON data. The engine only reads it and does not
/// keep it beyond the call.
#[derive(Debug, Clone)]
pub struct Record {
    data: Value,
}

impl Record {
    /// Create a record from JSON data.
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Get the underlying JSON value.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl From<Value> for Record {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

/// Look up a direct key in the record's top-level object.
pub(crate) fn lookup_field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data {
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

/// Walk a dotted path segment by segment, descending into nested objects.
///
/// Short-circuits to `None` as soon as a segment is missing or the walk
/// reaches a non-object.
pub(crate) fn lookup_path<'a>(data: &'a Value, expression: &str) -> Option<&'a Value> {
    let mut current = data;

    for segment in expression.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Render a resolved value as substitution text.
///
/// Scalars keep their canonical text form. `null`, arrays and objects have
/// no placeholder representation and degrade to the empty string, matching
/// the treatment of missing keys.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
