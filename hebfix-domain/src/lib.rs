//! Domain logic: decide which records hold character-reversed text.
//!
//! This crate owns *what* should be fixed and why. It does not own *how* the
//! text is rewritten; that's the `hebfix-edit` crate.

mod config;
mod planner;
mod rules;

pub use config::{RuleConfigError, RulesConfig, TrailingConfig};
pub use planner::Planner;
pub use rules::{
    CORRECT_MARKERS, Classification, REVERSED_MARKERS, REVERSED_TRAILING_STEM, Rule, RuleSet,
    TRAILING_TERMINATORS, TrailingPattern, Verdict, default_rules, is_reversed,
};
