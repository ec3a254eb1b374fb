//! CLI module for shelfql
//!
//! Provides the command-line interface:
//! - serve: boot the store and serve the GraphQL endpoint
//! - query: one-shot document execution against a fresh store
//! - schema: print the schema as SDL

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{query, run, schema, serve};
pub use errors::{CliError, CliResult};
