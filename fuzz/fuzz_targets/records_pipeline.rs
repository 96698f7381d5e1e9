#![no_main]

//! Fuzz target for parse -> plan -> apply -> serialize.
//!
//! Arbitrary bytes must either be rejected with an error or produce a
//! collection of the same length that parses back.

use hebfix_core::codec::{parse_records, serialize_records};
use hebfix_domain::Planner;
use hebfix_edit::apply_plan;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(records) = parse_records(s) else {
        return;
    };

    let plan = Planner::default().plan(&records);
    let Ok(fixed) = apply_plan(&records, &plan) else {
        return;
    };
    assert_eq!(fixed.len(), records.len());

    if let Ok(out) = serialize_records(&fixed) {
        let back = parse_records(&out).expect("serialized output parses");
        assert_eq!(back.len(), fixed.len());
    }
});
