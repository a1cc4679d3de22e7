//! Field analysis: extract field paths from both documents and suggest
//! mappings between them.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use whisperer_common::{ApiError, ConfidenceBucket};
use whisperer_mapper::{extract_fields, suggest_mappings, Mapping};

use crate::handlers::{coerce_document, require_body};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub source_json: Option<Value>,
    pub target_json: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub source_fields: Vec<String>,
    pub target_fields: Vec<String>,
    pub mappings: Vec<SuggestedMapping>,
    pub success: bool,
}

/// A mapping plus the server-computed confidence bucket, so badge rendering
/// and bucket boundaries live in one place.
#[derive(Debug, Serialize)]
pub struct SuggestedMapping {
    #[serde(flatten)]
    pub mapping: Mapping,
    pub confidence_level: ConfidenceBucket,
}

impl From<Mapping> for SuggestedMapping {
    fn from(mapping: Mapping) -> Self {
        let confidence_level = ConfidenceBucket::from_score(mapping.confidence);
        Self {
            mapping,
            confidence_level,
        }
    }
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<SharedState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = require_body(payload)?;

    let (source_json, target_json) = match (request.source_json, request.target_json) {
        (Some(s), Some(t)) if !s.is_null() && !t.is_null() => (s, t),
        _ => {
            return Err(ApiError::BadRequest(
                "Both source_json and target_json are required".to_string(),
            ))
        }
    };

    let source_json = coerce_document(source_json)?;
    let target_json = coerce_document(target_json)?;

    let source_fields = extract_fields(&source_json)
        .map_err(|e| ApiError::BadRequest(format!("source_json: {e}")))?;
    let target_fields = extract_fields(&target_json)
        .map_err(|e| ApiError::BadRequest(format!("target_json: {e}")))?;

    let mappings = suggest_mappings(&source_fields, &target_fields, state.config.match_threshold);

    info!(
        source_fields = source_fields.len(),
        target_fields = target_fields.len(),
        mappings = mappings.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        source_fields,
        target_fields,
        mappings: mappings.into_iter().map(SuggestedMapping::from).collect(),
        success: true,
    }))
}
