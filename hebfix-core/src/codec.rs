//! JSON encoding of the record collection.
//!
//! Output is two-space indented with non-ASCII text kept literal and object
//! keys in their original order.

use anyhow::Context;
use hebfix_types::record::Record;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordLoadError {
    #[error("json parse error: {message}")]
    Json { message: String },

    #[error("top-level value must be an array of records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record #{index} is not an object (found {found})")]
    NotAnObject { index: usize, found: &'static str },
}

pub fn parse_records(contents: &str) -> Result<Vec<Record>, RecordLoadError> {
    let value: Value = serde_json::from_str(contents).map_err(|e| RecordLoadError::Json {
        message: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(RecordLoadError::NotAnArray {
                found: kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Record::new(fields)),
            other => Err(RecordLoadError::NotAnObject {
                index,
                found: kind(&other),
            }),
        })
        .collect()
}

pub fn serialize_records(records: &[Record]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(records).context("serialize records")
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
