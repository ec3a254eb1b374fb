//! API-layer errors
//!
//! Request-class failures: the envelope or document was unusable before
//! execution began. Execution-class failures never surface here; they go
//! into the response's `errors` array instead.

use thiserror::Error;

use crate::query::QueryError;
use crate::schema::SchemaError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors the API layer itself produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request envelope could not be read
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// The document failed to parse or named no usable operation
    #[error("{0}")]
    Query(#[from] QueryError),

    /// `variables` did not decode to a JSON object
    #[error("variables must be a JSON object: {0}")]
    BadVariables(String),

    /// A mutation arrived over a read-only transport (GET)
    #[error("mutations are not allowed over GET")]
    MutationNotAllowed,

    /// Registry construction failed at boot
    #[error("{0}")]
    Schema(#[from] SchemaError),
}

impl ApiError {
    /// Stable machine code, delegated to the underlying error where one
    /// exists.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Query(err) => err.code(),
            ApiError::BadVariables(_) => "BAD_VARIABLES",
            ApiError::MutationNotAllowed => "MUTATION_NOT_ALLOWED",
            ApiError::Schema(err) => err.code(),
        }
    }
}
