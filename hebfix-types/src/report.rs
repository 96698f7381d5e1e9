use crate::record::RecordId;
use serde::{Deserialize, Serialize};

/// Outcome of a run, as shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixReport {
    pub schema: String,
    pub fixed: usize,
    pub total: usize,

    /// Every fixed id, untruncated.
    #[serde(default)]
    pub fixed_ids: Vec<RecordId>,

    #[serde(default)]
    pub dry_run: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,
}

impl FixReport {
    pub fn new(fixed_ids: Vec<RecordId>, total: usize) -> Self {
        Self {
            schema: crate::schema::HEBFIX_REPORT_V1.to_string(),
            fixed: fixed_ids.len(),
            total,
            fixed_ids,
            dry_run: false,
            sha256_before: None,
            sha256_after: None,
        }
    }
}
