use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Full dump of the reference tables, for debugging broken relationships.
pub async fn diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "clients": state.store.clients().await,
        "projects": state.store.projects().await,
        "inspections": state.store.inspections().await,
    }))
}

/// Drop everything and restore the seed dataset.
pub async fn reset_data(State(state): State<AppState>) -> impl IntoResponse {
    let summary = state.store.reset().await;
    tracing::info!(
        clients = summary.clients,
        inspections = summary.inspections,
        "Store reset to seed dataset"
    );
    Json(json!({
        "message": "Data reset completed",
        "reset": summary,
    }))
}
