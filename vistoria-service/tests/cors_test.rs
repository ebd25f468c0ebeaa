mod common;

use common::TestApp;
use reqwest::Method;

#[tokio::test]
async fn preflight_request_gets_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(Method::OPTIONS, app.url("/api/health"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing CORS header"),
        "*"
    );
}

#[tokio::test]
async fn regular_responses_carry_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/health"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing CORS header"),
        "*"
    );
}

#[tokio::test]
async fn not_found_responses_carry_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/no-such-route"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("Missing CORS header"),
        "*"
    );
}

#[tokio::test]
async fn document_routes_carry_cors_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/api/document/clients"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_some());
}
