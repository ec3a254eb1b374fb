//! shelfql - a minimal GraphQL API over an in-memory book and author catalog
//!
//! Components, leaves first: the record store holds the two collections;
//! the type registry declares the entity shapes and their resolution
//! bindings; the query executor dispatches root fields and resolves
//! selected fields lazily; the api and http_server modules wrap it all in
//! the standard GraphQL-over-HTTP envelope.

pub mod api;
pub mod cli;
pub mod executor;
pub mod http_server;
pub mod query;
pub mod schema;
pub mod store;
