//! Integration tests for the versement resource.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::{APP_NAME, TestApp};

fn versement(montant: f64, date: &str) -> Value {
    json!({
        "montant": montant,
        "dateVersement": date,
        "libelle": "Salaire",
        "employeId": null,
    })
}

#[tokio::test]
async fn test_create_versement() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/versements", Some(versement(1250.5, "2024-03-31")))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.header("Location"), Some("/api/versements/1"));
    assert_eq!(
        response.body,
        json!({
            "id": 1,
            "montant": 1250.5,
            "dateVersement": "2024-03-31",
            "libelle": "Salaire",
            "employeId": null,
        })
    );
    assert_eq!(
        response.header("X-stBarnabeApp-alert"),
        Some("stBarnabeApp.versement.created")
    );
    assert_eq!(response.header("X-stBarnabeApp-params"), Some("1"));
}

#[tokio::test]
async fn test_create_with_existing_id_is_rejected() {
    let app = TestApp::new().await;
    let mut body = versement(10.0, "2024-01-15");
    body["id"] = json!(5);

    let response = app.request("POST", "/api/versements", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.header("Content-Type"),
        Some("application/problem+json")
    );
    assert_eq!(response.body["message"], "error.idexists");
    assert_eq!(response.body["entityName"], "versement");
    assert_eq!(response.body["errorKey"], "idexists");
    assert_eq!(
        response.header(&format!("X-{APP_NAME}-error")),
        Some("error.idexists")
    );
    assert_eq!(
        response.header(&format!("X-{APP_NAME}-params")),
        Some("versement")
    );

    let list = app.request("GET", "/api/versements", None).await;
    assert_eq!(list.header("X-Total-Count"), Some("0"));
}

#[tokio::test]
async fn test_update_versement() {
    let app = TestApp::new().await;
    let id = app
        .create("/api/versements", versement(100.5, "2024-02-01"))
        .await;

    let mut body = versement(200.5, "2024-02-02");
    body["id"] = json!(id);
    let response = app.request("PUT", "/api/versements", Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["montant"], 200.5);
    assert_eq!(
        response.header("X-stBarnabeApp-alert"),
        Some("stBarnabeApp.versement.updated")
    );
    assert_eq!(
        response.header("X-stBarnabeApp-params"),
        Some(id.to_string().as_str())
    );

    let fetched = app
        .request("GET", &format!("/api/versements/{id}"), None)
        .await;
    assert_eq!(fetched.body["dateVersement"], "2024-02-02");
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let app = TestApp::new().await;
    let id = app
        .create("/api/versements", versement(100.5, "2024-02-01"))
        .await;

    let response = app
        .request("PUT", "/api/versements", Some(versement(999.5, "2024-02-01")))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "error.idnull");
    assert_eq!(
        response.header("X-stBarnabeApp-error"),
        Some("error.idnull")
    );

    let fetched = app
        .request("GET", &format!("/api/versements/{id}"), None)
        .await;
    assert_eq!(fetched.body["montant"], 100.5);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = TestApp::new().await;
    let mut body = versement(1.5, "2024-02-01");
    body["id"] = json!(404);

    let response = app.request("PUT", "/api/versements", Some(body)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.header("X-stBarnabeApp-alert").is_none());
}

#[tokio::test]
async fn test_get_versement() {
    let app = TestApp::new().await;
    let id = app
        .create("/api/versements", versement(42.5, "2024-04-10"))
        .await;

    let response = app
        .request("GET", &format!("/api/versements/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["montant"], 42.5);
}

#[tokio::test]
async fn test_get_missing_versement_is_empty_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/versements/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.empty_body);
}

#[tokio::test]
async fn test_delete_versement() {
    let app = TestApp::new().await;
    let id = app
        .create("/api/versements", versement(42.5, "2024-04-10"))
        .await;

    let response = app
        .request("DELETE", &format!("/api/versements/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.empty_body);
    assert_eq!(
        response.header("X-stBarnabeApp-alert"),
        Some("stBarnabeApp.versement.deleted")
    );
    assert_eq!(
        response.header("X-stBarnabeApp-params"),
        Some(id.to_string().as_str())
    );

    let fetched = app
        .request("GET", &format!("/api/versements/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_versement_is_ok() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/api/versements/77", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("X-stBarnabeApp-params"), Some("77"));
}

#[tokio::test]
async fn test_list_versements_paginates() {
    let app = TestApp::new().await;
    for day in 1..=5 {
        app.create(
            "/api/versements",
            versement(day as f64 * 10.5, &format!("2024-05-0{day}")),
        )
        .await;
    }

    let response = app
        .request("GET", "/api/versements?page=1&size=2", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec![3, 4]);
    assert_eq!(response.header("X-Total-Count"), Some("5"));
    assert_eq!(
        response.header("Link"),
        Some(
            "</api/versements?page=2&size=2>; rel=\"next\",\
             </api/versements?page=0&size=2>; rel=\"prev\",\
             </api/versements?page=2&size=2>; rel=\"last\",\
             </api/versements?page=0&size=2>; rel=\"first\""
        )
    );
}

#[tokio::test]
async fn test_list_versements_sorted_descending() {
    let app = TestApp::new().await;
    app.create("/api/versements", versement(30.5, "2024-05-01"))
        .await;
    app.create("/api/versements", versement(10.5, "2024-05-02"))
        .await;
    app.create("/api/versements", versement(20.5, "2024-05-03"))
        .await;

    let response = app
        .request("GET", "/api/versements?sort=montant,desc", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec![1, 3, 2]);
}

#[tokio::test]
async fn test_list_with_repeated_sort_params() {
    let app = TestApp::new().await;
    app.create("/api/versements", versement(10.5, "2024-05-02"))
        .await;
    app.create("/api/versements", versement(10.5, "2024-05-01"))
        .await;
    app.create("/api/versements", versement(5.5, "2024-05-03"))
        .await;

    let response = app
        .request(
            "GET",
            "/api/versements?sort=montant,desc&sort=dateVersement,asc",
            None,
        )
        .await;

    assert_eq!(response.ids(), vec![2, 1, 3]);
}

#[tokio::test]
async fn test_list_rejects_unknown_sort_property() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/versements?sort=password,asc", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_body_is_rejected_before_store() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/versements", Some(versement(-5.5, "2024-01-01")))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "error.validation");
    assert_eq!(response.body["fieldErrors"][0]["field"], "montant");
    assert_eq!(response.body["fieldErrors"][0]["objectName"], "versement");

    let list = app.request("GET", "/api/versements", None).await;
    assert_eq!(list.header("X-Total-Count"), Some("0"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .raw_request("POST", "/api/versements", "{\"montant\": ".to_string())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "error.http.400");
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = TestApp::new().await;
    app.create("/api/versements", versement(10.5, "2024-05-01"))
        .await;

    let response = app
        .request("GET", "/api/versements?page=5&size=1", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.ids().is_empty());
    assert_eq!(response.header("X-Total-Count"), Some("1"));
    let link = response.header("Link").expect("Link header");
    assert!(link.contains("</api/versements?page=4&size=1>; rel=\"prev\""));
    assert!(link.contains("</api/versements?page=0&size=1>; rel=\"last\""));
    assert!(!link.contains("rel=\"next\""));
}

#[tokio::test]
async fn test_maximal_page_number_does_not_fail() {
    let app = TestApp::new().await;
    app.create("/api/versements", versement(10.5, "2024-05-01"))
        .await;

    let response = app
        .request(
            "GET",
            "/api/versements?page=18446744073709551615&size=1",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.ids().is_empty());
    let link = response.header("Link").expect("Link header");
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains("</api/versements?page=0&size=1>; rel=\"first\""));
}

#[tokio::test]
async fn test_non_numeric_id_is_problem() {
    let app = TestApp::new().await;

    for method in ["GET", "DELETE"] {
        let response = app.request(method, "/api/versements/abc", None).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.header("Content-Type"),
            Some("application/problem+json")
        );
        assert_eq!(response.body["message"], "error.http.400");
    }
}

#[tokio::test]
async fn test_unknown_employe_reference_is_conflict() {
    let app = TestApp::new().await;
    let mut body = versement(10.5, "2024-05-01");
    body["employeId"] = json!(999);

    let response = app.request("POST", "/api/versements", Some(body)).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "error.http.409");

    let list = app.request("GET", "/api/versements", None).await;
    assert_eq!(list.header("X-Total-Count"), Some("0"));
}
