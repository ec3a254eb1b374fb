//! API Layer for shelfql
//!
//! Transport-agnostic request handling: envelope types, the handler that
//! runs parse → dispatch → execute → serialize, and the request-class
//! error taxonomy.
//!
//! # Envelope Classes
//!
//! - request errors (unreadable envelope, parse failure, unknown
//!   operation name) → `Err(ApiError)`, no `data` key in the response
//! - execution errors (unknown field, bad argument, invalid selection) →
//!   `Ok` response with `data: null` and `errors` populated

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::GraphQlHandler;
pub use request::GraphQlRequest;
pub use response::{ErrorExtensions, GraphQlResponse, ResponseError};
