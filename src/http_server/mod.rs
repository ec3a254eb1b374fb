//! HTTP transport adapter for shelfql
//!
//! Accepts HTTP POST/GET on /graphql, parses the request envelope,
//! invokes the GraphQL handler, and serializes the response.
//!
//! # Routes
//!
//! - `POST /graphql` — JSON envelope `{query, variables?, operationName?}`
//! - `GET /graphql` — query-string parameters; read-only; serves the
//!   GraphiQL explorer to browsers when enabled
//! - `GET /health` — liveness check

mod config;
mod errors;
mod graphiql;
mod graphql_routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiRejection, HttpServerError, HttpServerResult};
pub use graphql_routes::{graphql_routes, GraphQlState};
pub use server::HttpServer;
