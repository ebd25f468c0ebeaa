mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn inspection_report_joins_related_records() {
    let app = TestApp::spawn().await;

    let report: Value = app
        .client
        .get(app.url("/api/document/inspections/1/report"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(report["protocol_number"], "VT-2023-0782");
    assert_eq!(report["status"], "completed");
    assert_eq!(report["client"]["name"], "Condomínio Solar das Flores");
    assert_eq!(report["project"]["city"], "São Paulo");
    assert_eq!(report["product"]["roof_model"], "Telha Ondulada");
    assert_eq!(report["technician"]["name"], "João da Silva");
    assert_eq!(report["conclusion"], "Aprovado");
    assert!(report["evidences"].as_array().expect("evidences").is_empty());
}

#[tokio::test]
async fn report_for_missing_inspection_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/document/inspections/999/report"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn generate_report_for_completed_inspection() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/inspections/1/generate-report"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["id"]
        .as_str()
        .expect("Missing report id")
        .starts_with("REP-"));
    assert_eq!(body["inspection_id"], 1);
    assert_eq!(body["status"], "generated");
    assert_eq!(body["download_url"], "/api/document/reports/1/download");
}

#[tokio::test]
async fn generate_report_rejects_unfinished_inspection() {
    let app = TestApp::spawn().await;

    // Seed inspection 3 is still in progress
    let response = app
        .client
        .post(app.url("/api/document/inspections/3/generate-report"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn download_returns_report_document() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/document/reports/1/download"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .expect("Missing content-type"),
        "application/pdf"
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("Missing content-disposition")
        .to_str()
        .expect("Invalid content-disposition");
    assert!(disposition.contains("relatorio-VT-2023-0782.pdf"));

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Protocolo: VT-2023-0782"));
    assert!(body.contains("Nome: Condomínio Solar das Flores"));
}

#[tokio::test]
async fn download_rejects_unfinished_inspection() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/document/reports/3/download"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn completing_an_inspection_unlocks_report_generation() {
    let app = TestApp::spawn().await;

    let blocked = app
        .client
        .post(app.url("/api/document/inspections/3/generate-report"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(blocked.status().as_u16(), 400);

    let patched = app
        .client
        .patch(app.url("/api/document/inspections/3"))
        .json(&json!({
            "status": "completed",
            "conclusion": "Aprovado com ressalvas"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(patched.status().as_u16(), 200);

    let response = app
        .client
        .post(app.url("/api/document/inspections/3/generate-report"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
}
