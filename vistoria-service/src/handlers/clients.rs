use crate::dtos::{CreateClientRequest, UpdateClientRequest};
use crate::models::Client;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_clients(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.clients().await)
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Client>, AppError> {
    state
        .store
        .client(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Client not found")))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let client = state.store.create_client(payload).await;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<Json<Client>, AppError> {
    state
        .store
        .update_client(id, payload)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Client not found")))
}
