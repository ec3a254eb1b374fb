//! HTTP server errors
//!
//! Maps envelope classes to status codes: request errors are 400, a
//! mutation over GET is 405, and the body is always an errors-only
//! GraphQL envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::{ApiError, GraphQlResponse, ResponseError};

/// Result type for the HTTP server
pub type HttpServerResult<T> = Result<T, HttpServerError>;

/// Errors raised while configuring or running the server.
#[derive(Debug, Error)]
pub enum HttpServerError {
    /// Configuration file problem
    #[error("config error: {0}")]
    Config(String),

    /// Bind or serve failure
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema registration failure at startup
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A request-class failure, rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiRejection(pub ApiError);

impl ApiRejection {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            ApiError::MutationNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ApiError> for ApiRejection {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = GraphQlResponse::request_error(ResponseError::from(&self.0));
        (status, Json(body)).into_response()
    }
}
