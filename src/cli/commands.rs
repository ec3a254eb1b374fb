//! CLI command implementations
//!
//! `serve` boots the HTTP server, `query` runs one document against a
//! freshly built store, `schema` prints the registry as SDL. Tracing is
//! initialized once here; `RUST_LOG` overrides the default filter.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::{GraphQlHandler, GraphQlRequest, GraphQlResponse, ResponseError};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{seeded_store, MemoryStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_json};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    match cli.command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Query {
            config,
            variables,
            file,
        } => query(config.as_deref(), variables.as_deref(), file.as_deref()),
        Command::Schema => schema(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shelfql=info"));
    // A second init (as happens under `cargo test`) is not an error.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    match path {
        Some(path) => Ok(HttpServerConfig::load(path)?),
        None => Ok(HttpServerConfig::default()),
    }
}

/// Boot the store and serve HTTP until interrupted.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    info!(addr = %config.socket_addr(), seed = config.seed, "starting shelfql");
    let server = HttpServer::with_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(format!("failed to create tokio runtime: {}", e)))?;
    rt.block_on(server.start())?;

    Ok(())
}

/// Execute one document against a fresh store and print the envelope.
pub fn query(
    config_path: Option<&Path>,
    variables: Option<&str>,
    file: Option<&Path>,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = if config.seed {
        seeded_store()
    } else {
        MemoryStore::new()
    };
    let handler = GraphQlHandler::new(store)?;

    let document = read_document(file)?;
    let variables = parse_variables(variables)?;
    let request = GraphQlRequest {
        query: document,
        variables,
        operation_name: None,
    };

    // Request-class failures still print as an envelope, like the HTTP
    // transport renders them.
    let response = match handler.handle(&request) {
        Ok(response) => response,
        Err(err) => GraphQlResponse::request_error(ResponseError::from(&err)),
    };
    write_json(&response)?;

    Ok(())
}

fn parse_variables(raw: Option<&str>) -> CliResult<Option<Map<String, Value>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: Value =
        serde_json::from_str(raw).map_err(|e| CliError::BadVariables(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(CliError::BadVariables(
            "expected a JSON object".to_string(),
        )),
    }
}

/// Print the full schema as GraphQL SDL.
pub fn schema() -> CliResult<()> {
    let handler = GraphQlHandler::new(MemoryStore::new())?;
    println!("{}", handler.roots().sdl());
    println!("{}", handler.types().sdl());
    Ok(())
}
