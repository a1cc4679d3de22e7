//! Health check endpoint.

use axum::response::IntoResponse;
use axum::Json;

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy", "app": "Data Whisperer" }))
}
