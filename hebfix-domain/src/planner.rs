use crate::rules::{Classification, RuleSet};
use hebfix_types::fields;
use hebfix_types::plan::{FixPlan, PlannedFix};
use hebfix_types::record::Record;
use serde_json::Value;
use tracing::{debug, warn};

/// Classifies every record's `text` and lists the ones to reverse back.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    rules: RuleSet,
}

impl Planner {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn plan(&self, records: &[Record]) -> FixPlan {
        let mut plan = FixPlan::new(records.len());

        for (index, record) in records.iter().enumerate() {
            let text = match record.get(fields::TEXT) {
                None => "",
                Some(Value::String(s)) => s.as_str(),
                Some(other) => {
                    warn!(index, id = %record.id(), kind = json_kind(other), "text is not a string; leaving record as is");
                    continue;
                }
            };

            let classification = self.rules.classify(text);
            debug!(index, id = %record.id(), ?classification, "classified");

            if let Classification::Reversed(_) = classification {
                plan.targets.push(PlannedFix {
                    index,
                    id: record.id(),
                    reason: classification.reason(),
                });
            }
        }

        plan
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
