use crate::dtos::{CreateProjectRequest, ProjectListParams, UpdateProjectRequest};
use crate::models::Project;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> impl IntoResponse {
    let projects = match params.client_id {
        Some(client_id) => state.store.projects_by_client(client_id).await,
        None => state.store.projects().await,
    };
    Json(projects)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    state
        .store
        .project(id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Project not found")))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let project = state.store.create_project(payload).await;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    state
        .store
        .update_project(id, payload)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Project not found")))
}
