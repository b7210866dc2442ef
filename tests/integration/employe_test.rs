//! Integration tests for the employe resource.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;

fn employe(nom: &str, prenom: &str) -> Value {
    json!({
        "nom": nom,
        "prenom": prenom,
        "email": format!("{}@stbarnabe.org", prenom.to_lowercase()),
        "dateEmbauche": "2021-09-01",
    })
}

#[tokio::test]
async fn test_create_employe() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/employes", Some(employe("Durand", "Alice")))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.header("Location"), Some("/api/employes/1"));
    assert_eq!(response.body["nom"], "Durand");
    assert_eq!(response.body["dateEmbauche"], "2021-09-01");
    assert_eq!(
        response.header("X-stBarnabeApp-alert"),
        Some("stBarnabeApp.employe.created")
    );
}

#[tokio::test]
async fn test_create_employe_with_id_is_rejected() {
    let app = TestApp::new().await;
    let mut body = employe("Durand", "Alice");
    body["id"] = json!(3);

    let response = app.request("POST", "/api/employes", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["entityName"], "employe");
    assert_eq!(
        response.header("X-stBarnabeApp-error"),
        Some("error.idexists")
    );
    assert_eq!(response.header("X-stBarnabeApp-params"), Some("employe"));
}

#[tokio::test]
async fn test_update_employe_without_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/api/employes", Some(employe("Durand", "Alice")))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errorKey"], "idnull");
}

#[tokio::test]
async fn test_update_employe() {
    let app = TestApp::new().await;
    let id = app.create("/api/employes", employe("Durand", "Alice")).await;

    let mut body = employe("Martin", "Alice");
    body["id"] = json!(id);
    let response = app.request("PUT", "/api/employes", Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["nom"], "Martin");
    assert_eq!(
        response.header("X-stBarnabeApp-alert"),
        Some("stBarnabeApp.employe.updated")
    );
}

#[tokio::test]
async fn test_invalid_employe_reports_every_field() {
    let app = TestApp::new().await;
    let body = json!({ "nom": "", "prenom": "Alice", "email": "not-an-email" });

    let response = app.request("POST", "/api/employes", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response.body["fieldErrors"]
        .as_array()
        .expect("fieldErrors should be an array")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "nom"]);
}

#[tokio::test]
async fn test_get_and_delete_employe() {
    let app = TestApp::new().await;
    let id = app.create("/api/employes", employe("Durand", "Alice")).await;

    let found = app.request("GET", &format!("/api/employes/{id}"), None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["prenom"], "Alice");

    let deleted = app
        .request("DELETE", &format!("/api/employes/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.header("X-stBarnabeApp-alert"),
        Some("stBarnabeApp.employe.deleted")
    );

    let missing = app.request("GET", &format!("/api/employes/{id}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.empty_body);
}

#[tokio::test]
async fn test_list_employes_sorted_by_name() {
    let app = TestApp::new().await;
    app.create("/api/employes", employe("Martin", "Bruno")).await;
    app.create("/api/employes", employe("Durand", "Alice")).await;
    app.create("/api/employes", employe("Petit", "Chloe")).await;

    let response = app
        .request("GET", "/api/employes?sort=nom,asc&size=2", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec![2, 1]);
    assert_eq!(response.header("X-Total-Count"), Some("3"));
    let link = response.header("Link").expect("Link header");
    assert!(link.contains("</api/employes?page=1&size=2>; rel=\"next\""));
    assert!(link.contains("</api/employes?page=1&size=2>; rel=\"last\""));
    assert!(!link.contains("rel=\"prev\""));
}

#[tokio::test]
async fn test_list_size_is_capped_by_config() {
    let mut config = stbarnabe_core::config::AppConfig::in_memory();
    config.application.pagination.max_size = 2;
    let app = TestApp::with_config(config).await;
    for prenom in ["Alice", "Bruno", "Chloe"] {
        app.create("/api/employes", employe("Durand", prenom)).await;
    }

    let response = app
        .request("GET", "/api/employes?size=50", None)
        .await;

    assert_eq!(response.ids().len(), 2);
    assert!(
        response
            .header("Link")
            .is_some_and(|l| l.contains("size=2"))
    );
}

#[tokio::test]
async fn test_deleting_employe_detaches_versements() {
    let app = TestApp::new().await;
    let employe_id = app.create("/api/employes", employe("Durand", "Alice")).await;
    let versement_id = app
        .create(
            "/api/versements",
            json!({ "montant": 1500.5, "dateVersement": "2024-06-30", "employeId": employe_id }),
        )
        .await;

    let deleted = app
        .request("DELETE", &format!("/api/employes/{employe_id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let versement = app
        .request("GET", &format!("/api/versements/{versement_id}"), None)
        .await;
    assert_eq!(versement.status, StatusCode::OK);
    assert_eq!(versement.body["employeId"], Value::Null);
    assert_eq!(versement.body["montant"], 1500.5);
}
