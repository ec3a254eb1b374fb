//! Query Executor for shelfql
//!
//! Dispatches parsed operations to root handlers and recursively resolves
//! nested fields through the type registry.
//!
//! # Design Principles
//!
//! - Tagged-variant root dispatch, validated at registration time
//! - All arguments coerced before any call executes
//! - Selection-driven laziness: unselected fields are never computed
//! - Not-found is null, never an error
//! - No state held across requests

mod errors;
mod executor;
mod root;

pub use errors::{ExecutorError, ExecutorResult};
pub use executor::{QueryExecutor, RecordReader, RecordWriter};
pub use root::{RootCall, RootField, RootOperation, RootRegistry};
