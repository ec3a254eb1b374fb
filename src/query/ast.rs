//! Selection tree handed to the executor
//!
//! Owned, lifetime-free mirror of the parts of the GraphQL grammar this
//! engine executes: operations, fields, arguments, nesting.

use super::errors::{QueryError, QueryResult};

/// The two executable operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// An argument value as written in the document.
///
/// Variables are carried symbolically and resolved against the request's
/// variables map when arguments are coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Variable(String),
}

/// One requested field, possibly with nested selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub alias: Option<String>,
    pub arguments: Vec<(String, ArgumentValue)>,
    pub selection_set: Vec<Selection>,
}

impl Selection {
    /// The key this field takes in the response object.
    pub fn output_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Look up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&ArgumentValue> {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }
}

/// One executable operation from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub selections: Vec<Selection>,
}

/// A parsed request document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub operations: Vec<Operation>,
}

impl ParsedDocument {
    /// Pick the operation to execute, honoring `operationName`.
    pub fn operation(&self, name: Option<&str>) -> QueryResult<&Operation> {
        match name {
            Some(wanted) => self
                .operations
                .iter()
                .find(|op| op.name.as_deref() == Some(wanted))
                .ok_or_else(|| QueryError::UnknownOperationName(wanted.to_string())),
            None => match self.operations.as_slice() {
                [] => Err(QueryError::NoOperations),
                [single] => Ok(single),
                _ => Err(QueryError::OperationNameRequired),
            },
        }
    }
}
