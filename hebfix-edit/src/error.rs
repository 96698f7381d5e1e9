//! Error types for hebfix-edit.
//!
//! Every variant is fatal for the run: a record flagged as reversed that
//! cannot be fixed aborts the whole collection.

use hebfix_types::record::RecordId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    /// A mandatory field is absent.
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    /// A field is present but has the wrong JSON type.
    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// A field error, located in the collection.
    #[error("record #{index} (id {id})")]
    Record {
        index: usize,
        id: RecordId,
        #[source]
        source: Box<EditError>,
    },

    /// The plan points past the end of the collection it is applied to.
    #[error("plan targets record #{index} but the collection holds {total}")]
    PlanMismatch { index: usize, total: usize },
}

impl EditError {
    /// The underlying field error, with any record location peeled off.
    pub fn root(&self) -> &EditError {
        match self {
            EditError::Record { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias using EditError.
pub type EditResult<T> = Result<T, EditError>;
