//! HTTP handlers for all web routes.

pub mod analyze;
pub mod export;
pub mod health;
pub mod index;
pub mod preview;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use whisperer_common::{ApiError, WhispererError};

/// Unwrap an extracted JSON body, converting axum's rejection into the
/// `{"error": ..}` shape the frontend expects.
pub(crate) fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

/// Accept a document given either as a JSON value or as a string containing
/// JSON, parsing the latter.
pub(crate) fn coerce_document(document: Value) -> Result<Value, ApiError> {
    match document {
        Value::String(text) => serde_json::from_str(&text)
            .map_err(|e| WhispererError::from(e).into()),
        other => Ok(other),
    }
}
