//! Parse collaborator for shelfql
//!
//! Wraps the `graphql-parser` crate and hands the executor an owned
//! selection tree: operation kind, field names, arguments, nesting.
//!
//! # Supported Grammar
//!
//! - query and mutation operations (named or shorthand)
//! - field selections with aliases and arguments
//! - Int, Float, String, Boolean, Null, and `$variable` argument values
//!
//! Fragments and subscriptions are rejected at parse time.

mod ast;
mod errors;
mod parser;

pub use ast::{ArgumentValue, Operation, OperationKind, ParsedDocument, Selection};
pub use errors::{QueryError, QueryResult};
pub use parser::parse_document;
