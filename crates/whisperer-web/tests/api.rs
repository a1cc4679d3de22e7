//! End-to-end tests for the JSON API, driving the router directly.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use whisperer_common::ServerConfig;
use whisperer_web::router::build_router;
use whisperer_web::state::AppState;

fn app() -> Router {
    build_router(AppState::new(ServerConfig::default()))
}

async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn example_source() -> Value {
    json!({
        "customer_id": "CUST-12345",
        "full_name": "John Doe",
        "email_address": "john.doe@example.com",
        "billing_address": {"city": "San Francisco", "zip_code": "94102"},
        "account_status": "ACTIVE"
    })
}

fn example_target() -> Value {
    json!({
        "userId": "",
        "name": "",
        "email": "",
        "address": {"city": "", "postalCode": ""},
        "status": ""
    })
}

#[tokio::test]
async fn analyze_returns_one_mapping_per_source_field() {
    let (status, body) = post(
        app(),
        "/api/analyze",
        json!({"source_json": example_source(), "target_json": example_target()}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let source_fields = body["source_fields"].as_array().unwrap();
    let mappings = body["mappings"].as_array().unwrap();
    assert_eq!(mappings.len(), source_fields.len());

    // Sorted field lists
    assert_eq!(
        body["target_fields"],
        json!(["address.city", "address.postalCode", "email", "name", "status", "userId"])
    );

    // Sorted by confidence descending, each with a bucket label
    let confidences: Vec<f64> = mappings
        .iter()
        .map(|m| m["confidence"].as_f64().unwrap())
        .collect();
    assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
    for mapping in mappings {
        let level = mapping["confidence_level"].as_str().unwrap();
        assert!(["none", "low", "medium", "high"].contains(&level));
    }
}

#[tokio::test]
async fn analyze_accepts_documents_as_json_strings() {
    let (status, body) = post(
        app(),
        "/api/analyze",
        json!({
            "source_json": "{\"customer_id\": 1}",
            "target_json": "{\"userId\": 0}"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source_fields"], json!(["customer_id"]));
}

#[tokio::test]
async fn analyze_rejects_invalid_embedded_json() {
    let (status, body) = post(
        app(),
        "/api/analyze",
        json!({"source_json": "{broken", "target_json": "{}"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Invalid JSON"), "got: {message}");
}

#[tokio::test]
async fn analyze_requires_both_documents() {
    let (status, body) = post(app(), "/api/analyze", json!({"source_json": {"a": 1}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Both source_json and target_json are required")
    );
}

#[tokio::test]
async fn analyze_rejects_non_object_document() {
    let (status, body) = post(
        app(),
        "/api/analyze",
        json!({"source_json": [1, 2], "target_json": {}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("source_json"));
}

#[tokio::test]
async fn malformed_body_keeps_error_shape() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn preview_applies_transforms_and_nested_targets() {
    let (status, body) = post(
        app(),
        "/api/preview",
        json!({
            "source_json": example_source(),
            "mappings": [
                {"source": "full_name", "target": "name", "transform": null, "confidence": 0.85},
                {"source": "account_status", "target": "status", "transform": "lowercase", "confidence": 0.9},
                {"source": "billing_address.city", "target": "address.city", "transform": "", "confidence": 0.8},
                {"source": "unmapped_field", "target": "", "transform": null, "confidence": 0.0}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["transformed"],
        json!({
            "name": "John Doe",
            "status": "active",
            "address": {"city": "San Francisco"}
        })
    );
}

#[tokio::test]
async fn preview_requires_source_document() {
    let (status, body) = post(app(), "/api/preview", json!({"mappings": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("source_json is required"));
}

#[tokio::test]
async fn preview_rejects_unknown_transform() {
    let (status, body) = post(
        app(),
        "/api/preview",
        json!({
            "source_json": {"a": 1},
            "mappings": [{"source": "a", "target": "b", "transform": "reverse"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unknown transform"));
}

#[tokio::test]
async fn export_filters_incomplete_mappings() {
    let (status, body) = post(
        app(),
        "/api/export",
        json!({
            "mappings": [
                {"source": "customer_id", "target": "userId", "transform": null, "confidence": 0.8},
                {"source": "lifetime_value", "target": "revenue", "transform": "to_int", "confidence": 0.4},
                {"source": "orphan", "target": "", "transform": null, "confidence": 0.0}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let config = &body["config"];
    assert_eq!(config["version"], json!("1.0"));
    assert_eq!(
        config["description"],
        json!("Data Whisperer mapping configuration")
    );
    assert!(config["generated_at"].is_string());

    let mappings = config["mappings"].as_array().unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0]["source"], json!("customer_id"));
    assert_eq!(mappings[0]["transform"], json!(null));
    assert_eq!(mappings[1]["transform"], json!("to_int"));
    // Confidence is a suggestion-time detail and is not exported.
    assert!(mappings[0].get("confidence").is_none());
}

#[tokio::test]
async fn export_accepts_empty_mapping_list() {
    let (status, body) = post(app(), "/api/export", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["config"]["mappings"], json!([]));
}

#[tokio::test]
async fn health_reports_app_name() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "healthy", "app": "Data Whisperer"}));
}

#[tokio::test]
async fn index_serves_workbench_page() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Data Whisperer"));
    assert!(html.contains("id=\"mappingTableBody\""));
}
