//! Execution errors
//!
//! The two failure kinds the core can produce (unknown field, bad
//! argument) plus the selection-shape check the original delegated to its
//! schema library. Not-found is never an error; it resolves to null.

use thiserror::Error;

/// Result type for execution
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Errors produced while executing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    /// The selection names a field the parent type does not declare
    #[error("unknown field `{field}` on type `{parent}`")]
    UnknownField { parent: String, field: String },

    /// A required argument is missing, mistyped, or not accepted
    #[error("argument `{argument}` of `{field}`: {reason}")]
    BadArgument {
        field: String,
        argument: String,
        reason: String,
    },

    /// Sub-selection present on a scalar, or missing on an object field
    #[error("field `{field}` on type `{parent}` {reason}")]
    InvalidSelection {
        parent: String,
        field: String,
        reason: &'static str,
    },

    /// Two selections would write the same response key
    #[error("duplicate selection key `{key}` on type `{parent}`")]
    DuplicateKey { parent: String, key: String },

    /// A field's output type is missing from the registry
    #[error("type `{0}` is not registered")]
    UnknownType(String),

    /// A field binding was executed against a record of the wrong kind
    #[error("field `{field}` on type `{parent}` cannot resolve against this record")]
    ResolverMismatch { parent: String, field: String },
}

impl ExecutorError {
    /// Stable machine code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorError::UnknownField { .. } => "UNKNOWN_FIELD",
            ExecutorError::BadArgument { .. } => "BAD_ARGUMENT",
            ExecutorError::InvalidSelection { .. } => "INVALID_SELECTION",
            ExecutorError::DuplicateKey { .. } => "INVALID_SELECTION",
            ExecutorError::UnknownType(_) => "UNKNOWN_TYPE",
            ExecutorError::ResolverMismatch { .. } => "RESOLVER_MISMATCH",
        }
    }

    /// Unknown field shorthand.
    pub fn unknown_field(parent: impl Into<String>, field: impl Into<String>) -> Self {
        ExecutorError::UnknownField {
            parent: parent.into(),
            field: field.into(),
        }
    }

    /// Bad argument shorthand.
    pub fn bad_argument(
        field: impl Into<String>,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ExecutorError::BadArgument {
            field: field.into(),
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}
