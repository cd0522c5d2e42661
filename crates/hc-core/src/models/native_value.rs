//! Host-native value kinds and the total conversion into them.

use std::collections::BTreeMap;

use serde_json::Value;

/// The closed set of values a host object property can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    String(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    /// Placeholder for anything outside the scalar kinds above.
    Undefined,
}

/// A host object: property name to value.
pub type NativeObject = BTreeMap<String, NativeValue>;

/// Convert a field value into its native kind.
///
/// Total over `serde_json::Value`: null, arrays, and objects map to
/// [`NativeValue::Undefined`] instead of failing. Integers that fit `i64`
/// stay integers; every other number becomes a float.
pub fn to_native(value: &Value) -> NativeValue {
    match value {
        Value::String(s) => NativeValue::String(s.clone()),
        Value::Bool(b) => NativeValue::Boolean(*b),
        Value::Number(n) => n
            .as_i64()
            .map(NativeValue::Integer)
            .or_else(|| n.as_f64().map(NativeValue::Number))
            .unwrap_or(NativeValue::Undefined),
        Value::Null | Value::Array(_) | Value::Object(_) => NativeValue::Undefined,
    }
}

impl NativeValue {
    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, NativeValue::Undefined)
    }
}
