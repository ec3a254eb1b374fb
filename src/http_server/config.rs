//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, CORS, and the
//! GraphiQL explorer toggle. Loaded from a JSON file; every field has a
//! default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{HttpServerError, HttpServerResult};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Serve the GraphiQL explorer on GET /graphql (default: true)
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,

    /// Load the initial catalog at boot (default: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphiql() -> bool {
    true
}

fn default_seed() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            graphiql: default_graphiql(),
            seed: default_seed(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> HttpServerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HttpServerError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| HttpServerError::Config(format!("invalid config JSON: {}", e)))
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.graphiql);
        assert!(config.seed);
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_load_applies_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"port\": 4000, \"graphiql\": false}}").unwrap();
        let config = HttpServerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 4000);
        assert!(!config.graphiql);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.seed);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = HttpServerConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config JSON"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = HttpServerConfig::load(Path::new("/nonexistent/shelfql.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
