//! HTTP Transport Tests
//!
//! Exercises the router without binding a socket, via
//! `tower::ServiceExt::oneshot`: envelope classes map to status codes,
//! GET is read-only, and the GraphiQL page is config-gated.

use axum::body::{to_bytes, Body};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shelfql::http_server::{HttpServer, HttpServerConfig};

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    HttpServer::with_config(HttpServerConfig::default())
        .unwrap()
        .router()
}

fn app_without_graphiql() -> Router {
    let config = HttpServerConfig {
        graphiql: false,
        ..Default::default()
    };
    HttpServer::with_config(config).unwrap().router()
}

fn post_body(query: &str) -> Body {
    Body::from(json!({"query": query}).to_string())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// POST /graphql
// =============================================================================

#[tokio::test]
async fn test_post_query_returns_data() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(CONTENT_TYPE, "application/json")
                .body(post_body("{ book(id: 1) { name author { name } } }"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"data": {"book": {
            "name": "Name of the Rose",
            "author": {"name": "Patrick Rothfuss"}
        }}})
    );
}

#[tokio::test]
async fn test_post_mutation_allowed() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(CONTENT_TYPE, "application/json")
                .body(post_body(
                    "mutation { addAuthor(name: \"New Author\") { id name } }",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["data"]["addAuthor"],
        json!({"id": 4, "name": "New Author"})
    );
}

#[tokio::test]
async fn test_post_execution_error_is_200_with_errors() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(CONTENT_TYPE, "application/json")
                .body(post_body("{ magazines { id } }"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNKNOWN_FIELD");
}

#[tokio::test]
async fn test_post_syntax_error_is_400() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(CONTENT_TYPE, "application/json")
                .body(post_body("{ books {"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("data").is_none());
    assert_eq!(body["errors"][0]["extensions"]["code"], "PARSE_FAILED");
}

#[tokio::test]
async fn test_post_unreadable_body_is_400_envelope() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_REQUEST");
}

// =============================================================================
// GET /graphql
// =============================================================================

#[tokio::test]
async fn test_get_query_with_encoded_variables() {
    let uri = "/graphql?query=query(%24id%3A%20Int)%7Bbook(id%3A%24id)%7Bname%7D%7D&variables=%7B%22id%22%3A2%7D";
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["book"]["name"], "The Name of the Wind");
}

#[tokio::test]
async fn test_get_mutation_is_405() {
    let uri = "/graphql?query=mutation%7BaddAuthor(name%3A%22X%22)%7Bid%7D%7D";
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"][0]["extensions"]["code"],
        "MUTATION_NOT_ALLOWED"
    );
}

#[tokio::test]
async fn test_get_without_query_serves_graphiql_to_browsers() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .header(ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("GraphiQL"));
}

#[tokio::test]
async fn test_get_without_query_is_400_for_non_browsers() {
    let response = app()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_graphiql_gated_by_config() {
    let response = app_without_graphiql()
        .oneshot(
            Request::builder()
                .uri("/graphql")
                .header(ACCEPT, "text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_route() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"status": "ok"}));
}
