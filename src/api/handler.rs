//! GraphQL request handler
//!
//! Orchestrates one request: parse the document, pick the operation,
//! execute, wrap the result in the response envelope. Request-class
//! failures come back as `Err(ApiError)` so the transport can choose a
//! status code; execution-class failures are folded into the envelope.

use tracing::debug;

use crate::executor::{QueryExecutor, RecordReader, RecordWriter, RootRegistry};
use crate::query::{parse_document, OperationKind};
use crate::schema::{library_registry, TypeRegistry};

use super::errors::{ApiError, ApiResult};
use super::request::GraphQlRequest;
use super::response::{GraphQlResponse, ResponseError};

/// Handler owning the store and the validated registries.
pub struct GraphQlHandler<S> {
    store: S,
    types: TypeRegistry,
    roots: RootRegistry,
}

impl<S: RecordReader + RecordWriter> GraphQlHandler<S> {
    /// Build a handler over the given store.
    ///
    /// Registry validation failures are boot-time errors.
    pub fn new(store: S) -> ApiResult<Self> {
        Ok(Self {
            store,
            types: library_registry()?,
            roots: RootRegistry::library()?,
        })
    }

    /// The type registry (for SDL rendering).
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// The root registry (for SDL rendering).
    pub fn roots(&self) -> &RootRegistry {
        &self.roots
    }

    /// Handle a request arriving over a read-write transport.
    pub fn handle(&self, request: &GraphQlRequest) -> ApiResult<GraphQlResponse> {
        self.run(request, false)
    }

    /// Handle a request arriving over a read-only transport (GET):
    /// mutations are refused before execution.
    pub fn handle_readonly(&self, request: &GraphQlRequest) -> ApiResult<GraphQlResponse> {
        self.run(request, true)
    }

    fn run(&self, request: &GraphQlRequest, readonly: bool) -> ApiResult<GraphQlResponse> {
        let document = parse_document(&request.query)?;
        let operation = document.operation(request.operation_name.as_deref())?;

        if readonly && operation.kind == OperationKind::Mutation {
            return Err(ApiError::MutationNotAllowed);
        }

        let variables = request.variables();
        let executor = QueryExecutor::new(&self.store, &self.types, &self.roots);
        match executor.execute(operation, &variables) {
            Ok(data) => Ok(GraphQlResponse::data(data)),
            Err(err) => {
                debug!(code = err.code(), "execution failed: {}", err);
                Ok(GraphQlResponse::execution_error(ResponseError::from(&err)))
            }
        }
    }
}
