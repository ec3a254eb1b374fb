//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfql serve [--config <path>] [--port <p>]
//! - shelfql query [--config <path>] [--variables <json>] [file]
//! - shelfql schema

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfql - A small GraphQL service over an in-memory book and author catalog
#[derive(Parser, Debug)]
#[command(name = "shelfql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind, overriding the configuration
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute a single query document and exit
    Query {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Document file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Print the schema as GraphQL SDL
    Schema,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
