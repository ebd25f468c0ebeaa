use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The body is fixed; orchestration tooling matches it
/// verbatim.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
