//! Response envelope
//!
//! The `{data, errors}` shape. `data` is absent for request-class
//! failures, null when execution failed, and an object on success. Empty
//! `errors` arrays are never serialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::executor::ExecutorError;

use super::errors::ApiError;

/// One entry in the response's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub message: String,
    pub extensions: ErrorExtensions,
}

/// Machine-readable error metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorExtensions {
    pub code: String,
}

impl ResponseError {
    /// Build an entry from a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: ErrorExtensions { code: code.into() },
        }
    }
}

impl From<&ExecutorError> for ResponseError {
    fn from(err: &ExecutorError) -> Self {
        Self::new(err.to_string(), err.code())
    }
}

impl From<&ApiError> for ResponseError {
    fn from(err: &ApiError) -> Self {
        Self::new(err.to_string(), err.code())
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

impl GraphQlResponse {
    /// Successful execution.
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Execution failed: data is explicit null.
    pub fn execution_error(error: ResponseError) -> Self {
        Self {
            data: Some(Value::Null),
            errors: vec![error],
        }
    }

    /// Request never reached execution: no data key at all.
    pub fn request_error(error: ResponseError) -> Self {
        Self {
            data: None,
            errors: vec![error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_omits_errors_key() {
        let response = GraphQlResponse::data(json!({"books": []}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"data": {"books": []}}));
    }

    #[test]
    fn test_execution_error_keeps_null_data() {
        let response =
            GraphQlResponse::execution_error(ResponseError::new("boom", "UNKNOWN_FIELD"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "data": null,
                "errors": [{"message": "boom", "extensions": {"code": "UNKNOWN_FIELD"}}]
            })
        );
    }

    #[test]
    fn test_request_error_omits_data_key() {
        let response = GraphQlResponse::request_error(ResponseError::new("bad", "PARSE_FAILED"));
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["errors"][0]["extensions"]["code"], "PARSE_FAILED");
    }
}
