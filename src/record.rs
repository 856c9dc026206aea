//! Immutable nested records built from JSON mappings.
//!
//! [`Record::new_recursive`] walks a JSON object and turns every nested object
//! into a nested [`Record`]; every other value stays a [`Value::Scalar`].
//!
//! ```rust
//! use accrue::{Record, Value};
//! use serde_json::json;
//!
//! let record = Record::from_json(json!({"a": 1, "b": {"c": 3}})).unwrap();
//! let inner = record.get("b").and_then(Value::as_record).unwrap();
//! assert_eq!(inner.get("c"), Some(&Value::Scalar(json!(3))));
//! ```

use indexmap::IndexMap;
use serde_json::{Map, Value as Json};

use crate::error::{Error, Result};
use crate::fused::mash_with;

/// One field of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any JSON value that is not an object.
    Scalar(Json),
    Record(Record),
}

impl Value {
    /// The nested record, if this field holds one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            Value::Scalar(_) => None,
        }
    }

    /// The JSON value, if this field is not a record.
    pub fn as_scalar(&self) -> Option<&Json> {
        match self {
            Value::Scalar(json) => Some(json),
            Value::Record(_) => None,
        }
    }

    /// Convert back to plain JSON, records becoming objects.
    pub fn into_json(self) -> Json {
        match self {
            Value::Scalar(json) => json,
            Value::Record(record) => record.into_json(),
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Object(map) => Value::Record(Record::new_recursive(map)),
            scalar => Value::Scalar(scalar),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

/// An immutable, insertion-ordered set of named fields.
///
/// Equality ignores field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// A record without fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON object, converting nested objects into
    /// nested records at every level.
    pub fn new_recursive(map: Map<String, Json>) -> Self {
        Self {
            fields: mash_with(map, |name, json| (name, Value::from(json))),
        }
    }

    /// Like [`new_recursive`](Self::new_recursive), for a JSON value that
    /// must be an object.
    pub fn from_json(json: Json) -> Result<Self> {
        match json {
            Json::Object(map) => Ok(Self::new_recursive(map)),
            other => Err(Error::NotAMapping {
                found: json_kind(&other),
            }),
        }
    }

    /// The field called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether a field called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Convert back to a JSON object, nested records included.
    pub fn into_json(self) -> Json {
        Json::Object(
            self.fields
                .into_iter()
                .map(|(name, value)| (name, value.into_json()))
                .collect(),
        )
    }
}

/// Builds a single level; values are taken as given.
impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: mash_with(iter, |name: K, value: Value| -> (String, Value) {
                (name.into(), value)
            }),
        }
    }
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
