//! Schema registration errors
//!
//! Registration errors are programming errors: they abort startup and are
//! never produced per-request.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building a type or root registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A type name was registered twice
    #[error("duplicate type `{0}`")]
    DuplicateType(String),

    /// A field name appeared twice on one type
    #[error("duplicate field `{field}` on type `{type_name}`")]
    DuplicateField { type_name: String, field: String },

    /// A field's output type names a type missing from the registry
    #[error("field `{field}` on type `{type_name}` references unknown type `{target}`")]
    UnknownTypeReference {
        type_name: String,
        field: String,
        target: String,
    },

    /// A field binding was attached to an entity kind it cannot read
    #[error("field `{field}` on type `{type_name}` has a binding that does not apply to {kind} records")]
    BindingMismatch {
        type_name: String,
        field: String,
        kind: &'static str,
    },

    /// An object-typed field carries no binding the executor can follow
    #[error("field `{field}` on type `{type_name}` is object-typed but bound as a scalar")]
    ScalarBindingOnObject { type_name: String, field: String },

    /// A root field name was registered twice
    #[error("duplicate root field `{0}`")]
    DuplicateRootField(String),

    /// A root field was registered under the wrong operation kind
    #[error("root field `{0}` registered under the wrong operation kind")]
    RootKindMismatch(String),
}

impl SchemaError {
    /// Stable machine code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::DuplicateType(_) => "DUPLICATE_TYPE",
            SchemaError::DuplicateField { .. } => "DUPLICATE_FIELD",
            SchemaError::UnknownTypeReference { .. } => "UNKNOWN_TYPE_REFERENCE",
            SchemaError::BindingMismatch { .. } => "BINDING_MISMATCH",
            SchemaError::ScalarBindingOnObject { .. } => "SCALAR_BINDING_ON_OBJECT",
            SchemaError::DuplicateRootField(_) => "DUPLICATE_ROOT_FIELD",
            SchemaError::RootKindMismatch(_) => "ROOT_KIND_MISMATCH",
        }
    }
}
