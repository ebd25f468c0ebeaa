use crate::dtos::{GeneratedReport, InspectionReport};
use crate::models::{Inspection, InspectionStatus};
use crate::services::report;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use service_core::error::AppError;

async fn fetch_inspection(state: &AppState, id: i64) -> Result<Inspection, AppError> {
    state
        .store
        .inspection(id)
        .await
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Inspection not found")))
}

/// Report payload joining the inspection with client, site, technician and
/// evidence data.
pub async fn inspection_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InspectionReport>, AppError> {
    let inspection = fetch_inspection(&state, id).await?;

    let client = state.store.client(inspection.client_id).await;
    let project = state.store.project(inspection.project_id).await;
    let technician = state.store.user(inspection.user_id).await;
    let evidences = state.store.evidences_by_inspection(id).await;

    Ok(Json(InspectionReport::assemble(
        inspection, client, project, technician, evidences,
    )))
}

/// Register a report generation for a completed inspection and hand back
/// the download location.
pub async fn generate_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GeneratedReport>, AppError> {
    let inspection = fetch_inspection(&state, id).await?;

    if inspection.status != InspectionStatus::Completed {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Reports can only be generated for completed inspections"
        )));
    }

    let generated_at = Utc::now();
    let report = GeneratedReport {
        id: report::report_id(generated_at),
        inspection_id: inspection.id,
        generated_at,
        download_url: format!("/api/document/reports/{}/download", inspection.id),
        status: "generated".to_string(),
    };

    tracing::info!(
        inspection_id = inspection.id,
        report_id = %report.id,
        "Report generated"
    );
    Ok(Json(report))
}

/// Serve the rendered report document for download.
pub async fn download_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let inspection = fetch_inspection(&state, id).await?;

    if inspection.status != InspectionStatus::Completed {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Report downloads are only available for completed inspections"
        )));
    }

    let client = state.store.client(inspection.client_id).await;
    let body = report::render(&inspection, client.as_ref());

    tracing::info!(
        inspection_id = inspection.id,
        size = body.len(),
        "Report download completed"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    report::download_filename(&inspection)
                ),
            ),
        ],
        body,
    ))
}
