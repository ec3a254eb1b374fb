//! Request envelope
//!
//! The standard GraphQL-over-HTTP shape: a document plus optional
//! variables and operation name. POST carries it as a JSON body, GET as
//! query-string parameters with `variables` JSON-encoded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};

/// Parameters accepted by the GraphQL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,

    #[serde(
        rename = "operationName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    /// Request carrying just a document.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// Assemble a request from GET-style parameters.
    ///
    /// `variables` arrives JSON-encoded; anything that does not decode to
    /// an object is refused.
    pub fn from_parts(
        query: String,
        variables: Option<&str>,
        operation_name: Option<String>,
    ) -> ApiResult<Self> {
        let variables = match variables {
            Some(raw) if !raw.trim().is_empty() => {
                let value: Value = serde_json::from_str(raw)
                    .map_err(|e| ApiError::BadVariables(e.to_string()))?;
                match value {
                    Value::Object(map) => Some(map),
                    Value::Null => None,
                    other => {
                        return Err(ApiError::BadVariables(format!(
                            "got {}",
                            json_type_name(&other)
                        )))
                    }
                }
            }
            _ => None,
        };

        Ok(Self {
            query,
            variables,
            operation_name,
        })
    }

    /// The variables map, empty when none were sent.
    pub fn variables(&self) -> Map<String, Value> {
        self.variables.clone().unwrap_or_default()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_post_body() {
        let request: GraphQlRequest = serde_json::from_value(json!({
            "query": "{ books { id } }",
            "variables": {"id": 1},
            "operationName": "Books"
        }))
        .unwrap();
        assert_eq!(request.query, "{ books { id } }");
        assert_eq!(request.operation_name.as_deref(), Some("Books"));
        assert_eq!(request.variables.unwrap().get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_variables_and_operation_name_optional() {
        let request: GraphQlRequest =
            serde_json::from_value(json!({"query": "{ books { id } }"})).unwrap();
        assert!(request.variables.is_none());
        assert!(request.operation_name.is_none());
        assert!(request.variables().is_empty());
    }

    #[test]
    fn test_from_parts_decodes_variables() {
        let request = GraphQlRequest::from_parts(
            "query ($id: Int) { book(id: $id) { name } }".to_string(),
            Some("{\"id\": 2}"),
            None,
        )
        .unwrap();
        assert_eq!(request.variables().get("id"), Some(&json!(2)));
    }

    #[test]
    fn test_from_parts_rejects_non_object_variables() {
        let err = GraphQlRequest::from_parts("{ books { id } }".to_string(), Some("[1]"), None)
            .unwrap_err();
        assert_eq!(err.code(), "BAD_VARIABLES");
    }
}
