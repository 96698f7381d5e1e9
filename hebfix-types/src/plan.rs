use crate::record::RecordId;
use serde::{Deserialize, Serialize};

/// Which records of a collection are to be reversed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixPlan {
    pub schema: String,
    /// Number of records in the collection the plan was built from.
    pub total: usize,
    /// Records to fix, in collection order.
    #[serde(default)]
    pub targets: Vec<PlannedFix>,
}

impl FixPlan {
    pub fn new(total: usize) -> Self {
        Self {
            schema: crate::schema::HEBFIX_PLAN_V1.to_string(),
            total,
            targets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.targets
            .binary_search_by_key(&index, |t| t.index)
            .is_ok()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.targets.iter().map(|t| t.id.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedFix {
    /// Position of the record in the collection.
    pub index: usize,
    pub id: RecordId,
    /// Rule that flagged the record, for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
