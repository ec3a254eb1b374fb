//! # HTTP Server
//!
//! Binds the GraphQL endpoint, health route, CORS, and request tracing
//! into one router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::GraphQlHandler;
use crate::store::{seeded_store, MemoryStore};

use super::config::HttpServerConfig;
use super::errors::{HttpServerError, HttpServerResult};
use super::graphql_routes::{graphql_routes, GraphQlState};

/// HTTP server for the shelfql GraphQL API.
#[derive(Debug)]
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration over a seeded store.
    pub fn new() -> HttpServerResult<Self> {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server from configuration, building the store per its
    /// `seed` flag.
    pub fn with_config(config: HttpServerConfig) -> HttpServerResult<Self> {
        let store = if config.seed {
            seeded_store()
        } else {
            MemoryStore::new()
        };
        let handler = GraphQlHandler::new(store)?;
        Self::with_handler(config, handler)
    }

    /// Create a server over an existing handler.
    pub fn with_handler(
        config: HttpServerConfig,
        handler: GraphQlHandler<MemoryStore>,
    ) -> HttpServerResult<Self> {
        let router = Self::build_router(&config, handler)?;
        Ok(Self { config, router })
    }

    /// Build the router with the endpoint routes and middleware.
    ///
    /// An unparseable configured origin is a configuration error, not a
    /// silently narrowed allow-list.
    fn build_router(
        config: &HttpServerConfig,
        handler: GraphQlHandler<MemoryStore>,
    ) -> HttpServerResult<Router> {
        let state = Arc::new(GraphQlState {
            handler,
            graphiql: config.graphiql,
        });

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use axum::http::HeaderValue;
            use tower_http::cors::AllowOrigin;
            let mut origins = Vec::with_capacity(config.cors_origins.len());
            for origin in &config.cors_origins {
                let value: HeaderValue = origin.parse().map_err(|_| {
                    HttpServerError::Config(format!("invalid CORS origin `{}`", origin))
                })?;
                origins.push(value);
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Ok(graphql_routes(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http()))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> HttpServerResult<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| HttpServerError::Config(format!("invalid socket address: {}", e)))?;

        info!("GraphQL endpoint at http://{}/graphql", addr);
        if self.config.graphiql {
            info!("GraphiQL explorer enabled on GET /graphql");
        }

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
