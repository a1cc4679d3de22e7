//! Mapping configuration export.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use whisperer_common::ApiError;
use whisperer_mapper::{Mapping, Transform};

use crate::handlers::require_body;
use crate::state::SharedState;

pub const CONFIG_VERSION: &str = "1.0";
pub const CONFIG_DESCRIPTION: &str = "Data Whisperer mapping configuration";

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub config: MappingConfig,
    pub success: bool,
}

/// The portable configuration artifact a user downloads and feeds into other
/// tooling. Confidence scores are a suggestion-time detail and are not kept.
#[derive(Debug, Serialize)]
pub struct MappingConfig {
    pub version: &'static str,
    pub description: &'static str,
    pub generated_at: String,
    pub mappings: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub source: String,
    pub target: String,
    pub transform: Option<Transform>,
}

impl From<Mapping> for ConfigEntry {
    fn from(mapping: Mapping) -> Self {
        Self {
            source: mapping.source,
            target: mapping.target,
            transform: mapping.transform,
        }
    }
}

/// POST /api/export
pub async fn export(
    State(_state): State<SharedState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = require_body(payload)?;

    let entries: Vec<ConfigEntry> = request
        .mappings
        .into_iter()
        .filter(Mapping::is_complete)
        .map(ConfigEntry::from)
        .collect();

    info!(mappings = entries.len(), "configuration exported");

    Ok(Json(ExportResponse {
        config: MappingConfig {
            version: CONFIG_VERSION,
            description: CONFIG_DESCRIPTION,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            mappings: entries,
        },
        success: true,
    }))
}
