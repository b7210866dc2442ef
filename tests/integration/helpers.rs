//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use stbarnabe_core::config::AppConfig;

/// Application name used in alert headers under test.
pub const APP_NAME: &str = "stBarnabeApp";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by a fresh in-memory store
    pub async fn new() -> Self {
        Self::with_config(AppConfig::in_memory()).await
    }

    /// Create a test application from a custom configuration
    pub async fn with_config(config: AppConfig) -> Self {
        let state = stbarnabe_api::build_state(config.clone())
            .await
            .expect("Failed to build application state");
        let router = stbarnabe_api::build_app(state);

        Self { router, config }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let empty_body = body_bytes.is_empty();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            empty_body,
        }
    }

    /// Create an entity through the API and return its assigned id
    pub async fn create(&self, path: &str, body: Value) -> i64 {
        let response = self.request("POST", path, Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response
            .body
            .get("id")
            .and_then(Value::as_i64)
            .expect("No id in create response")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when absent or not JSON
    pub body: Value,
    /// Whether the raw body was empty
    pub empty_body: bool,
}

impl TestResponse {
    /// Header value as a string, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Ids of the entities in a list body, in order
    pub fn ids(&self) -> Vec<i64> {
        self.body
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("id").and_then(Value::as_i64))
                    .collect()
            })
            .unwrap_or_default()
    }
}
