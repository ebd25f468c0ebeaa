use crate::handlers::{clients, dev, evidences, inspections, projects, reports};
use crate::startup::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// The document route group. The bootstrapper mounts it under a prefix of
/// its choosing; nothing in here knows where it lives.
pub fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/clients/:id",
            get(clients::get_client).patch(clients::update_client),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/:id",
            get(projects::get_project).patch(projects::update_project),
        )
        .route(
            "/inspections",
            get(inspections::list_inspections).post(inspections::create_inspection),
        )
        .route(
            "/inspections/:id",
            get(inspections::get_inspection).patch(inspections::update_inspection),
        )
        .route("/inspections/:id/report", get(reports::inspection_report))
        .route(
            "/inspections/:id/generate-report",
            post(reports::generate_report),
        )
        .route("/reports/:id/download", get(reports::download_report))
        .route(
            "/evidences",
            get(evidences::list_evidences).post(evidences::create_evidence),
        )
        .route(
            "/evidences/:id",
            get(evidences::get_evidence)
                .patch(evidences::update_evidence)
                .delete(evidences::delete_evidence),
        )
        .route("/dev/diagnostics", get(dev::diagnostics))
        .route("/dev/reset-data", post(dev::reset_data))
}
