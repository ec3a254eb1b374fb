//! GraphQL endpoint routes
//!
//! POST /graphql takes the JSON envelope; GET /graphql takes query-string
//! parameters (read-only: mutations are refused with 405) and serves the
//! GraphiQL explorer to browsers when enabled. GET /health reports
//! liveness.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header::ACCEPT;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::{ApiError, GraphQlHandler, GraphQlRequest};
use crate::store::MemoryStore;

use super::errors::ApiRejection;
use super::graphiql::GRAPHIQL_PAGE;

/// Shared endpoint state.
pub struct GraphQlState {
    pub handler: GraphQlHandler<MemoryStore>,
    pub graphiql: bool,
}

/// GET-style request parameters.
#[derive(Debug, Deserialize)]
pub struct GraphQlGetParams {
    query: Option<String>,
    variables: Option<String>,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
}

/// Build the /graphql and /health routes.
pub fn graphql_routes(state: Arc<GraphQlState>) -> Router {
    Router::new()
        .route("/graphql", get(graphql_get).post(graphql_post))
        .route("/health", get(health))
        .with_state(state)
}

async fn graphql_post(
    State(state): State<Arc<GraphQlState>>,
    payload: Result<Json<GraphQlRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return ApiRejection(ApiError::BadRequest(rejection.body_text())).into_response()
        }
    };

    debug!(operation_name = ?request.operation_name, "POST /graphql");
    match state.handler.handle(&request) {
        Ok(response) => Json(response).into_response(),
        Err(err) => ApiRejection(err).into_response(),
    }
}

async fn graphql_get(
    State(state): State<Arc<GraphQlState>>,
    Query(params): Query<GraphQlGetParams>,
    headers: HeaderMap,
) -> Response {
    let Some(query) = params.query else {
        if state.graphiql && accepts_html(&headers) {
            return Html(GRAPHIQL_PAGE).into_response();
        }
        return ApiRejection(ApiError::BadRequest(
            "missing `query` parameter".to_string(),
        ))
        .into_response();
    };

    let request = match GraphQlRequest::from_parts(
        query,
        params.variables.as_deref(),
        params.operation_name,
    ) {
        Ok(request) => request,
        Err(err) => return ApiRejection(err).into_response(),
    };

    debug!(operation_name = ?request.operation_name, "GET /graphql");
    match state.handler.handle_readonly(&request) {
        Ok(response) => Json(response).into_response(),
        Err(err) => ApiRejection(err).into_response(),
    }
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
