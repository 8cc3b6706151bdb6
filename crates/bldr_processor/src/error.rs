use bldr_emit::EmitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification failures, each naming the offending accessor.
///
/// A failing accessor aborts generation for its type only; other accessors
/// are still classified so every problem is reported at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("raw {collection} has no element type; parameterize the return type")]
    RawCollection {
        accessor: String,
        collection: String,
    },

    #[error("unbounded wildcard in {position} position cannot be resolved to a property type")]
    UnboundedWildcard { accessor: String, position: String },

    #[error("expected {expected} type argument(s) on {type_name}, found {found}")]
    GenericArity {
        accessor: String,
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("return type {type_name} matches no property kind")]
    Unclassifiable { accessor: String, type_name: String },

    #[error("toBuilder() requires a builder factory, but none is configured")]
    MissingBuilderFactory { accessor: String },
}

impl ClassifyError {
    /// The accessor (or pseudo-accessor) the diagnostic should point at.
    pub fn subject(&self) -> &str {
        match self {
            ClassifyError::RawCollection { accessor, .. }
            | ClassifyError::UnboundedWildcard { accessor, .. }
            | ClassifyError::GenericArity { accessor, .. }
            | ClassifyError::Unclassifiable { accessor, .. }
            | ClassifyError::MissingBuilderFactory { accessor } => accessor,
        }
    }
}

/// Failures while rendering an already-validated [`crate::Metadata`]. These
/// are defects in the generator itself; no text is surfaced alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("emission failed: {0}")]
    Emit(#[from] EmitError),
}

/// One (subject, message) pair in a structured generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

impl From<ClassifyError> for Diagnostic {
    fn from(err: ClassifyError) -> Self {
        Diagnostic::new(err.subject().to_string(), err.to_string())
    }
}
