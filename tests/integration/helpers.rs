//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use homefruits_api::{AppState, build_app};
use homefruits_core::config::{
    AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig, StorageBackend,
};
use homefruits_database::Stores;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "admin@homefruits.test";
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct store access
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application on empty in-memory stores
    pub fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                backend: StorageBackend::Memory,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig::new(JWT_SECRET, ADMIN_EMAIL),
            logging: LoggingConfig::default(),
        };

        let state = AppState::new(config, Stores::memory());
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// Register a user and return the session body
    pub async fn register(&self, email: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/reg",
                Some(serde_json::json!({ "email": email, "password": PASSWORD })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        response.body
    }

    /// Register a user and return their access token
    pub async fn user_token(&self, email: &str) -> String {
        self.register(email).await["access_token"]
            .as_str()
            .expect("No access_token in registration response")
            .to_string()
    }

    /// Register the configured administrator and return their access token
    pub async fn admin_token(&self) -> String {
        self.user_token(ADMIN_EMAIL).await
    }

    /// Stock an item through the admin API and return its id
    pub async fn stock_item(&self, admin_token: &str, name: &str, quantity: i32, cost: i32) -> String {
        let response = self
            .request(
                "POST",
                "/admin/item",
                Some(serde_json::json!({ "name": name, "quantity": quantity, "cost": cost })),
                Some(admin_token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Stocking failed: {:?}",
            response.body
        );
        response.body["id"]
            .as_str()
            .expect("No id in item response")
            .to_string()
    }

    /// Available quantity of an item, read through the public listing
    pub async fn available(&self, item_id: &str) -> i64 {
        let response = self.request("GET", "/api/items", None, None).await;
        response
            .body
            .as_array()
            .expect("Item listing is not an array")
            .iter()
            .find(|item| item["id"] == item_id)
            .and_then(|item| item["quantity"].as_i64())
            .expect("Item not listed")
    }

    /// Make an HTTP request to the test app with a bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_auth(method, path, body, token.map(|t| format!("Bearer {t}")))
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_auth(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<String>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, body_str, authorization).await
    }

    /// Make an HTTP request with a raw body
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        authorization: Option<String>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Assert a status and the `error` code of the body
    pub fn assert_error(&self, status: StatusCode, code: &str) {
        assert_eq!(self.status, status, "Unexpected body: {:?}", self.body);
        assert_eq!(self.body["error"], code, "Unexpected body: {:?}", self.body);
    }
}
