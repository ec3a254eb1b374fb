//! Parse-level errors
//!
//! These are envelope-class failures: the document never reached
//! execution.

use thiserror::Error;

/// Result type for document parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors produced while turning a request document into a selection tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The document is not syntactically valid GraphQL
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Fragment definitions and spreads are not supported
    #[error("fragments are not supported")]
    FragmentsUnsupported,

    /// Subscriptions are not supported
    #[error("subscriptions are not supported")]
    SubscriptionsUnsupported,

    /// An argument used a value kind the executor cannot coerce
    #[error("unsupported value for argument `{0}`")]
    UnsupportedArgumentValue(String),

    /// The document defines no executable operation
    #[error("document contains no executable operation")]
    NoOperations,

    /// `operationName` matched no operation in the document
    #[error("unknown operation `{0}`")]
    UnknownOperationName(String),

    /// Several operations but no `operationName` to pick one
    #[error("operation name required when the document defines multiple operations")]
    OperationNameRequired,
}

impl QueryError {
    /// Stable machine code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Syntax(_) => "PARSE_FAILED",
            QueryError::FragmentsUnsupported => "UNSUPPORTED_FRAGMENT",
            QueryError::SubscriptionsUnsupported => "UNSUPPORTED_SUBSCRIPTION",
            QueryError::UnsupportedArgumentValue(_) => "UNSUPPORTED_ARGUMENT_VALUE",
            QueryError::NoOperations => "NO_OPERATIONS",
            QueryError::UnknownOperationName(_) => "UNKNOWN_OPERATION",
            QueryError::OperationNameRequired => "OPERATION_NAME_REQUIRED",
        }
    }
}
