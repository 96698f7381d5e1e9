//! Property-based tests for the record transformer.
//!
//! These tests verify key invariants:
//! - Reversal is its own inverse
//! - Only `text`, `options` and `category` change; key order is kept
//! - Applying a plan keeps collection length, order and ids
//! - Detection followed by a fix clears the detection

use hebfix_domain::Planner;
use hebfix_edit::{apply_plan, fix_record, reverse_text};
use hebfix_types::record::Record;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn arb_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[א-תa-z ?.,!]{0,16}").unwrap()
}

fn arb_extra() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        arb_text().prop_map(Value::from),
        Just(Value::Null),
    ]
}

/// A record with text/options, optional category, and extra fields in random positions.
fn arb_record() -> impl Strategy<Value = Record> {
    (
        any::<u32>(),
        arb_text(),
        prop::collection::vec(arb_text(), 0..5),
        prop::option::of(arb_text()),
        prop::collection::vec(("[a-z]{1,6}_x", arb_extra()), 0..4),
    )
        .prop_map(|(id, text, options, category, extras)| {
            let mut m = Map::new();
            m.insert("id".to_string(), json!(id));
            for (k, v) in &extras[..extras.len() / 2] {
                m.insert(k.clone(), v.clone());
            }
            m.insert("text".to_string(), json!(text));
            m.insert("options".to_string(), json!(options));
            if let Some(c) = category {
                m.insert("category".to_string(), json!(c));
            }
            for (k, v) in &extras[extras.len() / 2..] {
                m.insert(k.clone(), v.clone());
            }
            Record::new(m)
        })
}

proptest! {
    #[test]
    fn reversal_is_self_inverse(s in any::<String>()) {
        prop_assert_eq!(reverse_text(&reverse_text(&s)), s);
    }

    #[test]
    fn fix_only_touches_text_fields(record in arb_record()) {
        let fixed = fix_record(&record).unwrap();

        let before: Vec<&str> = record.field_names().collect();
        let after: Vec<&str> = fixed.field_names().collect();
        prop_assert_eq!(&before, &after);

        for name in before {
            match name {
                "text" | "category" => {
                    let original = record.get_str(name).unwrap();
                    prop_assert_eq!(fixed.get_str(name).unwrap(), reverse_text(original));
                }
                "options" => {
                    let original = record.get(name).unwrap().as_array().unwrap();
                    let now = fixed.get(name).unwrap().as_array().unwrap();
                    prop_assert_eq!(original.len(), now.len());
                    for (o, n) in original.iter().zip(now) {
                        prop_assert_eq!(n.as_str().unwrap(), reverse_text(o.as_str().unwrap()));
                    }
                }
                _ => {
                    prop_assert_eq!(record.get(name), fixed.get(name));
                }
            }
        }
    }

    #[test]
    fn fixing_twice_restores_the_record(record in arb_record()) {
        let twice = fix_record(&fix_record(&record).unwrap()).unwrap();
        prop_assert_eq!(twice, record);
    }

    #[test]
    fn apply_preserves_length_order_and_ids(records in prop::collection::vec(arb_record(), 0..12)) {
        let plan = Planner::default().plan(&records);
        let out = apply_plan(&records, &plan).unwrap();

        prop_assert_eq!(out.len(), records.len());
        for (index, (a, b)) in records.iter().zip(&out).enumerate() {
            prop_assert_eq!(a.id(), b.id());
            if plan.contains_index(index) {
                prop_assert_eq!(b, &fix_record(a).unwrap());
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn detection_then_fix_resolves_the_classification() {
    let records: Vec<Record> = serde_json::from_value(json!([
        { "id": 1, "text": " המ תלוכי?", "options": ["ןכ", "אל"], "category": "טווינ" },
        { "id": 2, "text": "מה התלוכי?", "options": ["כן", "לא"] },
        { "id": 3, "text": "? ימ ןתונ תוכז הכירד", "options": [] },
    ]))
    .unwrap();

    let planner = Planner::default();
    let plan = planner.plan(&records);
    assert_eq!(plan.targets.len(), 2);

    let fixed = apply_plan(&records, &plan).unwrap();
    assert!(planner.plan(&fixed).is_empty());
    assert_eq!(fixed[0].get_str("category"), Some("ניווט"));
    assert_eq!(fixed[1], records[1]);
}
