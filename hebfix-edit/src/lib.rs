//! Edit engine for hebfix plans.
//!
//! Responsibilities:
//! - Reverse the text fields of a flagged record into a new record.
//! - Apply a plan to a whole collection, all or nothing.
//! - Generate a unified diff preview of the serialized collection.

mod error;

pub use error::{EditError, EditResult};

use diffy::PatchFormatter;
use hebfix_types::fields;
use hebfix_types::plan::FixPlan;
use hebfix_types::record::Record;
use serde_json::Value;
use tracing::debug;

/// Full end-to-end reversal by Unicode scalar value. Its own inverse.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Produce a corrected copy of a record flagged as reversed.
///
/// `text`, every `options` entry, and `category` (only when present) are
/// reversed. Other fields keep their values and positions.
pub fn fix_record(record: &Record) -> EditResult<Record> {
    let text = match record.get(fields::TEXT) {
        None => return Err(EditError::MissingField { field: fields::TEXT }),
        Some(Value::String(s)) => reverse_text(s),
        Some(_) => {
            return Err(EditError::InvalidField {
                field: fields::TEXT,
                expected: "a string",
            });
        }
    };

    let options = match record.get(fields::OPTIONS) {
        None => {
            return Err(EditError::MissingField {
                field: fields::OPTIONS,
            });
        }
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(Value::String(reverse_text(s))),
                _ => Err(EditError::InvalidField {
                    field: fields::OPTIONS,
                    expected: "an array of strings",
                }),
            })
            .collect::<EditResult<Vec<_>>>()?,
        Some(_) => {
            return Err(EditError::InvalidField {
                field: fields::OPTIONS,
                expected: "an array of strings",
            });
        }
    };

    let category = match record.get(fields::CATEGORY) {
        None => None,
        Some(Value::String(s)) => Some(reverse_text(s)),
        Some(_) => {
            return Err(EditError::InvalidField {
                field: fields::CATEGORY,
                expected: "a string",
            });
        }
    };

    let mut fixed = record.clone();
    fixed.insert(fields::TEXT, Value::String(text));
    fixed.insert(fields::OPTIONS, Value::Array(options));
    if let Some(category) = category {
        fixed.insert(fields::CATEGORY, Value::String(category));
    }
    Ok(fixed)
}

/// Apply a plan, returning a new collection of the same length and order.
///
/// Records not named by the plan are cloned untouched. The first failing
/// record aborts the whole operation.
pub fn apply_plan(records: &[Record], plan: &FixPlan) -> EditResult<Vec<Record>> {
    if let Some(target) = plan.targets.iter().find(|t| t.index >= records.len()) {
        return Err(EditError::PlanMismatch {
            index: target.index,
            total: records.len(),
        });
    }

    let mut out = records.to_vec();
    for target in &plan.targets {
        let original = &records[target.index];
        let fixed = fix_record(original).map_err(|e| EditError::Record {
            index: target.index,
            id: original.id(),
            source: Box::new(e),
        })?;
        debug!(index = target.index, id = %target.id, "fixed record");
        out[target.index] = fixed;
    }
    Ok(out)
}

/// Unified diff between two serializations of the data file. Empty when equal.
pub fn render_patch(path: &str, before: &str, after: &str) -> String {
    if before == after {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    let formatter = PatchFormatter::new();
    let body = formatter.fmt_patch(&patch).to_string();
    // diffy repeats its own ---/+++ header; keep only the hunks.
    match body.split_once("\n@@") {
        Some((_, rest)) => {
            out.push_str("@@");
            out.push_str(rest);
        }
        None => out.push_str(&body),
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
