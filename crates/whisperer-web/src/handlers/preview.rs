//! Transformation preview: run the current mapping list against the source
//! document without persisting anything.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use whisperer_common::ApiError;
use whisperer_mapper::{transform_data, Mapping};

use crate::handlers::{coerce_document, require_body};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub source_json: Option<Value>,
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub transformed: Value,
    pub success: bool,
}

/// POST /api/preview
pub async fn preview(
    State(_state): State<SharedState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = require_body(payload)?;

    let source_json = match request.source_json {
        Some(doc) if !doc.is_null() => coerce_document(doc)?,
        _ => return Err(ApiError::BadRequest("source_json is required".to_string())),
    };

    let transformed = transform_data(&source_json, &request.mappings)
        .map_err(|e| ApiError::BadRequest(format!("source_json: {e}")))?;

    debug!(mappings = request.mappings.len(), "preview computed");

    Ok(Json(PreviewResponse {
        transformed,
        success: true,
    }))
}
