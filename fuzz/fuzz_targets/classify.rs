#![no_main]

//! Fuzz target for the reversed-text classifier.
//!
//! Classification must terminate without panicking on any string, and
//! reversal must be its own inverse.

use hebfix_domain::{default_rules, is_reversed};
use hebfix_edit::reverse_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let verdict = is_reversed(text);
    assert_eq!(verdict, default_rules().classify(text).is_reversed());

    let reversed = reverse_text(text);
    let _ = is_reversed(&reversed);
    assert_eq!(reverse_text(&reversed), text);
});
