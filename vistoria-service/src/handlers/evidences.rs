use crate::dtos::{CreateEvidenceRequest, EvidenceListParams, UpdateEvidenceRequest};
use crate::models::Evidence;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_evidences(
    State(state): State<AppState>,
    Query(params): Query<EvidenceListParams>,
) -> Result<Json<Vec<Evidence>>, AppError> {
    let inspection_id = params.inspection_id.ok_or_else(|| {
        AppError::BadRequest(anyhow::anyhow!("inspection_id query parameter is required"))
    })?;
    Ok(Json(state.store.evidences_by_inspection(inspection_id).await))
}

pub async fn get_evidence(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Evidence>, AppError> {
    state
        .store
        .evidence(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Evidence not found")))
}

pub async fn create_evidence(
    State(state): State<AppState>,
    Json(payload): Json<CreateEvidenceRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let evidence = state.store.create_evidence(payload).await;
    Ok((StatusCode::CREATED, Json(evidence)))
}

pub async fn update_evidence(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEvidenceRequest>,
) -> Result<Json<Evidence>, AppError> {
    state
        .store
        .update_evidence(id, payload)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Evidence not found")))
}

pub async fn delete_evidence(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_evidence(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(anyhow::anyhow!("Evidence not found")))
    }
}
