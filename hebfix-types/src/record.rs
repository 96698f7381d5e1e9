use crate::fields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One question entry of the dataset.
///
/// The record is an ordered JSON object. Only `text`, `options` and `category`
/// carry meaning here; every other field is carried along verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Identifier used for reporting. Absent ids surface as `null`.
    pub fn id(&self) -> RecordId {
        RecordId(self.0.get(fields::ID).cloned().unwrap_or(Value::Null))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Replaces the value of an existing field in place, keeping its position.
    /// Inserting a new key appends it.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Opaque record identifier, compared only for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Value);

impl RecordId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
