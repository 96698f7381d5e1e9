//! Embeddable core library for hebfix.
//!
//! Provides a clap-free, I/O-abstracted entry point for repairing a record
//! collection whose Hebrew text was stored character-reversed.
//!
//! # Port traits
//!
//! Storage is abstracted behind [`RecordStore`](ports::RecordStore). The
//! [`adapters`] module provides a JSON-file implementation and an in-memory
//! one for embedding and tests.
//!
//! # Entry points
//!
//! - [`run_fix`](pipeline::run_fix): load, classify, fix and store back

pub mod adapters;
pub mod codec;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export the rule types so callers don't need hebfix-domain directly.
pub use hebfix_domain::{RuleSet, RulesConfig};

pub use pipeline::{FixOutcome, ToolError, run_fix};
