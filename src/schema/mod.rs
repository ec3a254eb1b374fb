//! Type Registry for shelfql
//!
//! Declares the two entity shapes and their field-level resolution
//! bindings, including the cross-references (book→author, author→books).
//!
//! # Design Principles
//!
//! - Forward-declared descriptors in a by-name lookup table
//! - All validation at registration time, none per-request
//! - Named references resolved at execution time (no closure capture)
//! - Field values computed lazily, only when selected

mod errors;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{library_registry, TypeRegistry};
pub use types::{
    EntityKind, FieldBinding, FieldDescriptor, FieldType, ScalarField, TypeDescriptor,
};
