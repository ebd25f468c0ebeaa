use crate::dtos::{CreateInspectionRequest, InspectionListParams, UpdateInspectionRequest};
use crate::models::Inspection;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_inspections(
    State(state): State<AppState>,
    Query(params): Query<InspectionListParams>,
) -> impl IntoResponse {
    // First matching filter wins, mirroring the mobile client's queries
    let inspections = if let Some(user_id) = params.user_id {
        state.store.inspections_by_user(user_id).await
    } else if let Some(client_id) = params.client_id {
        state.store.inspections_by_client(client_id).await
    } else if let Some(project_id) = params.project_id {
        state.store.inspections_by_project(project_id).await
    } else if let Some(status) = params.status {
        state.store.inspections_by_status(status).await
    } else {
        state.store.inspections().await
    };
    Json(inspections)
}

pub async fn get_inspection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Inspection>, AppError> {
    state
        .store
        .inspection(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Inspection not found")))
}

pub async fn create_inspection(
    State(state): State<AppState>,
    Json(payload): Json<CreateInspectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let inspection = state.store.create_inspection(payload).await?;
    Ok((StatusCode::CREATED, Json(inspection)))
}

pub async fn update_inspection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInspectionRequest>,
) -> Result<Json<Inspection>, AppError> {
    state
        .store
        .update_inspection(id, payload)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Inspection not found")))
}
