mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn seeded_clients_are_listed() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .client
        .get(app.url("/api/document/clients"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let clients = body.as_array().expect("Expected an array");
    assert_eq!(clients.len(), 3);
    assert_eq!(clients[0]["name"], "Condomínio Solar das Flores");
    assert_eq!(clients[0]["type"], "company");
}

#[tokio::test]
async fn missing_client_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/document/clients/999"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn create_client_round_trips() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/clients"))
        .json(&json!({
            "name": "Residência Nova Esperança",
            "type": "person",
            "document": "123.456.789-00",
            "contact_name": "Ana Lima"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.expect("Failed to parse JSON");
    let id = created["id"].as_i64().expect("Missing id");

    let fetched: Value = app
        .client
        .get(app.url(&format!("/api/document/clients/{}", id)))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(fetched["name"], "Residência Nova Esperança");
    assert_eq!(fetched["type"], "person");
}

#[tokio::test]
async fn invalid_client_payload_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/clients"))
        .json(&json!({ "name": "", "type": "company" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn patch_client_merges_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .patch(app.url("/api/document/clients/1"))
        .json(&json!({ "contact_name": "Novo Contato" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let updated: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(updated["contact_name"], "Novo Contato");
    assert_eq!(updated["name"], "Condomínio Solar das Flores");
}

#[tokio::test]
async fn projects_filter_by_client() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .client
        .get(app.url("/api/document/projects?client_id=2"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let projects = body.as_array().expect("Expected an array");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Residencial Vila Nova");
    assert_eq!(projects[0]["city"], "Campinas");
}

#[tokio::test]
async fn inspections_filter_by_status() {
    let app = TestApp::spawn().await;

    let all: Value = app
        .client
        .get(app.url("/api/document/inspections"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(all.as_array().expect("Expected an array").len(), 6);

    let completed: Value = app
        .client
        .get(app.url("/api/document/inspections?status=completed"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let completed = completed.as_array().expect("Expected an array");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["protocol_number"], "VT-2023-0782");
}

#[tokio::test]
async fn create_inspection_defaults_to_draft() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/inspections"))
        .json(&json!({
            "protocol_number": "VT-2024-0100",
            "user_id": 1,
            "client_id": 1,
            "project_id": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(created["status"], "draft");
}

#[tokio::test]
async fn duplicate_protocol_number_conflicts() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/inspections"))
        .json(&json!({
            "protocol_number": "VT-2023-0782",
            "user_id": 1,
            "client_id": 1,
            "project_id": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn inspection_with_unknown_client_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/inspections"))
        .json(&json!({
            "protocol_number": "VT-2024-0101",
            "user_id": 1,
            "client_id": 999,
            "project_id": 1
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn patch_inspection_rejects_unknown_project() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .patch(app.url("/api/document/inspections/1"))
        .json(&json!({ "project_id": 999 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn evidences_require_inspection_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/document/evidences"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn evidence_lifecycle() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/document/evidences"))
        .json(&json!({
            "inspection_id": 1,
            "type": "photo",
            "category": "infiltração",
            "file_url": "/uploads/telhado-01.jpg",
            "notes": "Mancha no canto sudeste"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.expect("Failed to parse JSON");
    let id = created["id"].as_i64().expect("Missing id");

    let listed: Value = app
        .client
        .get(app.url("/api/document/evidences?inspection_id=1"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(listed.as_array().expect("Expected an array").len(), 1);

    let patched: Value = app
        .client
        .patch(app.url(&format!("/api/document/evidences/{}", id)))
        .json(&json!({ "notes": "Confirmado após segunda visita" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(patched["notes"], "Confirmado após segunda visita");

    let deleted = app
        .client
        .delete(app.url(&format!("/api/document/evidences/{}", id)))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status().as_u16(), 204);

    let gone = app
        .client
        .get(app.url(&format!("/api/document/evidences/{}", id)))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(gone.status().as_u16(), 404);
}

#[tokio::test]
async fn reset_data_restores_seed() {
    let app = TestApp::spawn().await;

    app.client
        .post(app.url("/api/document/clients"))
        .json(&json!({ "name": "Cliente Temporário", "type": "company" }))
        .send()
        .await
        .expect("Failed to execute request");

    let reset: Value = app
        .client
        .post(app.url("/api/document/dev/reset-data"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(reset["reset"]["users"], 2);
    assert_eq!(reset["reset"]["clients"], 3);
    assert_eq!(reset["reset"]["projects"], 3);
    assert_eq!(reset["reset"]["inspections"], 6);
    assert_eq!(reset["reset"]["evidences"], 0);

    let clients: Value = app
        .client
        .get(app.url("/api/document/clients"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(clients.as_array().expect("Expected an array").len(), 3);
}

#[tokio::test]
async fn diagnostics_dump_all_tables() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .client
        .get(app.url("/api/document/dev/diagnostics"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(body["clients"].as_array().expect("clients").len(), 3);
    assert_eq!(body["projects"].as_array().expect("projects").len(), 3);
    assert_eq!(body["inspections"].as_array().expect("inspections").len(), 6);
}
