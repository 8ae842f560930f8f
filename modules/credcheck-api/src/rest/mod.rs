pub mod analyze;
pub mod trends;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "OK", "message": "CredCheck API is running"}))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}

/// Standard error body: a machine-readable `error` plus a user-facing
/// `message`.
pub(crate) fn error_response(status: StatusCode, error: &str, message: &str) -> Response {
    (status, Json(json!({"error": error, "message": message}))).into_response()
}
