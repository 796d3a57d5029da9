//! Record representation
//!
//! A record is a flat map from field name to typed value, backed by a
//! `BTreeMap` so field iteration order is deterministic. The query pipeline
//! never mutates records it was given; results are clones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::errors::{RecordError, RecordResult};
use super::value::FieldValue;

/// A single key-value record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the record, for literal-style construction
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Looks up a field value by key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// True when the record carries the given field key
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Renders the record as a JSON object.
    ///
    /// Non-finite floats have no JSON representation and degrade to null.
    pub fn to_json(&self) -> JsonValue {
        let mut object = serde_json::Map::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            object.insert(key.clone(), value_to_json(value));
        }
        JsonValue::Object(object)
    }
}

impl TryFrom<&JsonValue> for Record {
    type Error = RecordError;

    fn try_from(value: &JsonValue) -> RecordResult<Self> {
        let object = match value {
            JsonValue::Object(object) => object,
            other => return Err(RecordError::NotAnObject(json_type_name(other))),
        };
        let mut fields = BTreeMap::new();
        for (key, value) in object {
            fields.insert(key.clone(), convert_value(key, value)?);
        }
        Ok(Record { fields })
    }
}

impl TryFrom<JsonValue> for Record {
    type Error = RecordError;

    fn try_from(value: JsonValue) -> RecordResult<Self> {
        Record::try_from(&value)
    }
}

/// Converts a JSON array of objects into a record collection
pub fn records_from_json(value: &JsonValue) -> RecordResult<Vec<Record>> {
    let items = match value {
        JsonValue::Array(items) => items,
        other => return Err(RecordError::NotAnArray(json_type_name(other))),
    };
    items.iter().map(Record::try_from).collect()
}

/// Integers beyond the i64 range degrade to floats, the way serde_json
/// reads them back.
fn convert_value(field: &str, value: &JsonValue) -> RecordResult<FieldValue> {
    match value {
        JsonValue::Null => Ok(FieldValue::Null),
        JsonValue::Bool(b) => Ok(FieldValue::Bool(*b)),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(FieldValue::Int(i)),
            None => n
                .as_f64()
                .map(FieldValue::Float)
                .ok_or_else(|| RecordError::UnsupportedValue {
                    field: field.to_string(),
                    found: "number",
                }),
        },
        JsonValue::String(s) => Ok(FieldValue::Str(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| convert_value(field, item))
            .collect::<RecordResult<Vec<_>>>()
            .map(FieldValue::Array),
        JsonValue::Object(_) => Err(RecordError::UnsupportedValue {
            field: field.to_string(),
            found: "object",
        }),
    }
}

fn value_to_json(value: &FieldValue) -> JsonValue {
    match value {
        FieldValue::Null => JsonValue::Null,
        FieldValue::Bool(b) => JsonValue::Bool(*b),
        FieldValue::Int(i) => JsonValue::from(*i),
        FieldValue::Float(x) => serde_json::Number::from_f64(*x)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        FieldValue::Str(s) => JsonValue::String(s.clone()),
        FieldValue::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
