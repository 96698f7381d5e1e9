//! Shared DTOs for the hebfix workspace.
//!
//! # Design constraints
//! - Records are kept as ordered JSON objects; unknown fields round-trip untouched.
//! - Plan and report types are serialized for operators and tooling.
//! - Prefer adding optional fields over changing semantics.

pub mod plan;
pub mod record;
pub mod report;

/// Schema identifiers.
pub mod schema {
    pub const HEBFIX_PLAN_V1: &str = "hebfix.plan.v1";
    pub const HEBFIX_REPORT_V1: &str = "hebfix.report.v1";
}

/// Field names the classifier and transformer care about.
pub mod fields {
    pub const ID: &str = "id";
    pub const TEXT: &str = "text";
    pub const OPTIONS: &str = "options";
    pub const CATEGORY: &str = "category";
}
