//! Integration tests for registration, login, refresh and bearer handling.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use helpers::{PASSWORD, TestApp};
use homefruits_auth::TokenSigner;
use homefruits_core::types::UserId;

#[tokio::test]
async fn test_register_returns_session_without_secrets() {
    let app = TestApp::new();
    let body = app.register("ann@homefruits.test").await;

    assert!(body["access_token"].is_string());
    assert_eq!(body["refresh_token"].as_str().unwrap().len(), 64);
    assert!(body["access_expires_at"].is_string());
    assert!(body["refresh_expires_at"].is_string());
    assert_eq!(body["user"]["email"], "ann@homefruits.test");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"]["created_at"].is_string());

    let raw = body.to_string();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("$argon2"));
}

#[tokio::test]
async fn test_register_then_login_gives_distinct_tokens_for_same_user() {
    let app = TestApp::new();
    let registered = app.register("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": "ann@homefruits.test", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let logged_in = response.body;
    assert_ne!(registered["access_token"], logged_in["access_token"]);
    assert_eq!(registered["user"]["id"], logged_in["user"]["id"]);

    for token in [&registered["access_token"], &logged_in["access_token"]] {
        let response = app
            .request("GET", "/api/shopping_cart", None, token.as_str())
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new();
    app.register("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            "/api/reg",
            Some(json!({ "email": "ann@homefruits.test", "password": "other" })),
            None,
        )
        .await;
    response.assert_error(StatusCode::CONFLICT, "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = TestApp::new();
    app.register("ann@homefruits.test").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": "ann@homefruits.test", "password": "nope" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": "bob@homefruits.test", "password": PASSWORD })),
            None,
        )
        .await;

    wrong_password.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    unknown_email.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["message"], "Unauthorized user");
}

#[tokio::test]
async fn test_malformed_credentials_are_bad_requests() {
    let app = TestApp::new();

    let empty = app
        .request(
            "POST",
            "/api/reg",
            Some(json!({ "email": "", "password": PASSWORD })),
            None,
        )
        .await;
    empty.assert_error(StatusCode::BAD_REQUEST, "BAD_REQUEST");

    let missing_field = app
        .request("POST", "/api/login", Some(json!({ "email": "a@b.c" })), None)
        .await;
    missing_field.assert_error(StatusCode::BAD_REQUEST, "BAD_REQUEST");

    let not_json = app
        .send("POST", "/api/login", "{not json".to_string(), None)
        .await;
    not_json.assert_error(StatusCode::BAD_REQUEST, "BAD_REQUEST");
}

#[tokio::test]
async fn test_refresh_mints_working_access_token() {
    let app = TestApp::new();
    let session = app.register("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            "/api/refresh",
            Some(json!({ "refresh_token": session["refresh_token"] })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["expires_at"].is_string());

    let cart = app
        .request(
            "GET",
            "/api/shopping_cart",
            None,
            response.body["access_token"].as_str(),
        )
        .await;
    assert_eq!(cart.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_refresh_token_is_unauthorized() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/refresh",
            Some(json!({ "refresh_token": "00".repeat(32) })),
            None,
        )
        .await;
    response.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_missing_or_malformed_bearer_is_unauthorized() {
    let app = TestApp::new();
    let token = app.user_token("ann@homefruits.test").await;

    let cases = [
        None,
        Some(String::new()),
        Some("Bearer ".to_string()),
        Some(format!("Token {token}")),
        Some(format!("Bearer Bearer {token}")),
        Some("Bearer not-a-jwt".to_string()),
    ];

    for authorization in cases {
        let response = app
            .request_with_auth("GET", "/api/shopping_cart", None, authorization.clone())
            .await;
        response.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
        assert_eq!(
            response.body["message"], "Unauthorized user",
            "header: {authorization:?}"
        );
    }
}

#[tokio::test]
async fn test_foreign_and_expired_tokens_are_unauthorized() {
    let app = TestApp::new();
    let session = app.register("ann@homefruits.test").await;
    let user_id: UserId = session["user"]["id"].as_str().unwrap().parse().unwrap();

    let foreign = TokenSigner::new("some-other-secret", "HomeFruits")
        .issue(user_id, Duration::minutes(15))
        .unwrap();
    let expired = TokenSigner::new(helpers::JWT_SECRET, "HomeFruits")
        .issue(user_id, Duration::seconds(-30))
        .unwrap();

    for token in [foreign.token, expired.token] {
        let response = app
            .request("GET", "/api/shopping_cart", None, Some(token.as_str()))
            .await;
        response.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    }
}
