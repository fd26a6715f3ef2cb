//! Integration tests for admin routes and the health check.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["storage"], "memory");
}

#[tokio::test]
async fn test_non_admin_cannot_stock_items() {
    let app = TestApp::new();
    let user = app.user_token("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            "/admin/item",
            Some(json!({ "name": "Apples", "quantity": 10, "cost": 3 })),
            Some(&user),
        )
        .await;
    response.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");

    let listing = app.request("GET", "/api/items", None, None).await;
    assert_eq!(listing.body, json!([]));
}

#[tokio::test]
async fn test_admin_routes_require_a_token() {
    let app = TestApp::new();

    let insert = app
        .request(
            "POST",
            "/admin/item",
            Some(json!({ "name": "Apples", "quantity": 10, "cost": 3 })),
            None,
        )
        .await;
    insert.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");

    let revoke = app
        .request("POST", &format!("/admin/revoke/{}", "ab".repeat(32)), None, None)
        .await;
    revoke.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_admin_stocks_items() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/admin/item",
            Some(json!({ "name": "Cherries", "quantity": 40, "cost": 7 })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["name"], "Cherries");
    assert_eq!(response.body["quantity"], 40);
    assert_eq!(response.body["cost"], 7);

    let listing = app.request("GET", "/api/items", None, None).await;
    let items = listing.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], response.body["id"]);
}

#[tokio::test]
async fn test_admin_item_validation() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    for body in [
        json!({ "name": "Cherries", "quantity": -1, "cost": 7 }),
        json!({ "name": "Cherries", "quantity": 1, "cost": -7 }),
        json!({ "name": "", "quantity": 1, "cost": 7 }),
        json!({ "name": "Cherries" }),
    ] {
        let response = app
            .request("POST", "/admin/item", Some(body), Some(&admin))
            .await;
        response.assert_error(StatusCode::BAD_REQUEST, "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_revoked_refresh_token_cannot_refresh() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let session = app.register("ann@homefruits.test").await;
    let refresh_token = session["refresh_token"].as_str().unwrap().to_string();

    let revoked = app
        .request(
            "POST",
            &format!("/admin/revoke/{refresh_token}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(revoked.status, StatusCode::NO_CONTENT);

    let refresh = app
        .request(
            "POST",
            "/api/refresh",
            Some(json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    refresh.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");

    // The access token issued alongside stays valid until it expires.
    let cart = app
        .request(
            "GET",
            "/api/shopping_cart",
            None,
            session["access_token"].as_str(),
        )
        .await;
    assert_eq!(cart.status, StatusCode::OK);
}

#[tokio::test]
async fn test_revoke_is_idempotent_on_both_methods() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let session = app.register("ann@homefruits.test").await;
    let path = format!("/admin/revoke/{}", session["refresh_token"].as_str().unwrap());

    let first = app.request("POST", &path, None, Some(&admin)).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let second = app.request("GET", &path, None, Some(&admin)).await;
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    let unknown = app
        .request(
            "POST",
            &format!("/admin/revoke/{}", "ab".repeat(32)),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_non_admin_cannot_revoke() {
    let app = TestApp::new();
    let session = app.register("ann@homefruits.test").await;
    let token = session["access_token"].as_str().unwrap();
    let refresh_token = session["refresh_token"].as_str().unwrap();

    let response = app
        .request(
            "POST",
            &format!("/admin/revoke/{refresh_token}"),
            None,
            Some(token),
        )
        .await;
    response.assert_error(StatusCode::FORBIDDEN, "FORBIDDEN");

    let refresh = app
        .request(
            "POST",
            "/api/refresh",
            Some(json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(refresh.status, StatusCode::OK);
}
