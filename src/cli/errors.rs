//! CLI-specific error types
//!
//! Every CLI error terminates the process with a non-zero exit code.

use thiserror::Error;

use crate::api::ApiError;
use crate::http_server::HttpServerError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration or server problem
    #[error("{0}")]
    Server(#[from] HttpServerError),

    /// stdin/stdout or file I/O problem
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Request could not be served
    #[error("{0}")]
    Api(#[from] ApiError),

    /// --variables did not decode to a JSON object
    #[error("invalid --variables: {0}")]
    BadVariables(String),

    /// tokio runtime could not be created
    #[error("runtime error: {0}")]
    Runtime(String),
}
