//! Integration tests for the health endpoint and application-wide conventions.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health_in_memory() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "UP");
    assert_eq!(response.body["database"], "UP");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/salaires", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_application_name_drives_alert_headers() {
    let mut config = stbarnabe_core::config::AppConfig::in_memory();
    config.application.name = "paieApp".to_string();
    let app = TestApp::with_config(config).await;

    let created = app
        .request(
            "POST",
            "/api/versements",
            Some(json!({ "montant": 12.5, "dateVersement": "2024-06-01" })),
        )
        .await;
    assert_eq!(
        created.header("X-paieApp-alert"),
        Some("paieApp.versement.created")
    );

    let rejected = app
        .request(
            "POST",
            "/api/versements",
            Some(json!({ "id": 1, "montant": 12.5, "dateVersement": "2024-06-01" })),
        )
        .await;
    assert_eq!(rejected.header("X-paieApp-error"), Some("error.idexists"));
    assert_eq!(rejected.header("X-paieApp-params"), Some("versement"));
}
