//! The item-value tree resolved by field paths.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;

/// A field value inside an item record.
///
/// This is the full set of shapes the ordering engine understands: scalar
/// leaves (`Null`, `Bool`, `Number`, `String`, `Instant`) and nested
/// containers (`List`, `Object`). "Absent" has no variant: resolving a path
/// that does not exist yields `Option::None` instead, so the null/absent
/// distinction stays visible in the type system.
///
/// Values must already carry their comparable runtime type; the engine does
/// not coerce string-encoded numbers or dates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Explicit null.
    Null,
    /// Boolean; orders `false < true`.
    Bool(bool),
    /// Numeric value, compared by magnitude.
    Number(f64),
    /// String, compared lexicographically.
    String(String),
    /// Point in time, compared by instant.
    Instant(DateTime<Utc>),
    /// Ordered list of values, addressable by decimal index segments.
    List(Vec<FieldValue>),
    /// Sub-record, addressable by key segments. Insertion order is kept.
    Object(IndexMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The name of this value's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
            FieldValue::Instant(_) => "instant",
            FieldValue::List(_) => "list",
            FieldValue::Object(_) => "object",
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => FieldValue::String(s),
            Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            Value::Object(map) => FieldValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, FieldValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        FieldValue::from(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::Instant(t)
    }
}
