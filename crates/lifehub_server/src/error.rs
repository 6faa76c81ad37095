//! Transport-level error mapping.
//!
//! Validation detail never crosses the wire: every rejected payload
//! collapses to the same generic message, and every missing record to
//! the kind's localized not-found message, matching what the
//! presentation layer displays.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Generic client message for any rejected payload.
pub const INVALID_DATA: &str = "Dados inválidos";

/// Expected request outcomes surfaced as HTTP statuses.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Invalid(&'static str),

    #[error("{0}")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
