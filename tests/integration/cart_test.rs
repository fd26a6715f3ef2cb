//! Integration tests for reservations and the shopping cart.

mod helpers;

use axum::http::StatusCode;
use futures::future::join_all;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_reserve_adds_cart_line_and_decrements_stock() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let apples = app.stock_item(&admin, "Apples", 10, 3).await;
    let user = app.user_token("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            &format!("/api/item/{apples}"),
            Some(json!({ "quantity": 4 })),
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["item_id"], apples.as_str());
    assert_eq!(response.body["quantity"], 4);
    assert_eq!(response.body["cost"], 12);

    assert_eq!(app.available(&apples).await, 6);

    let cart = app
        .request("GET", "/api/shopping_cart", None, Some(&user))
        .await;
    assert_eq!(cart.status, StatusCode::OK);
    let lines = cart.body.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["item_name"], "Apples");
    assert_eq!(lines[0]["quantity"], 4);
}

#[tokio::test]
async fn test_carts_are_per_user() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let pears = app.stock_item(&admin, "Pears", 5, 2).await;
    let ann = app.user_token("ann@homefruits.test").await;
    let bob = app.user_token("bob@homefruits.test").await;

    let response = app
        .request(
            "POST",
            &format!("/api/item/{pears}"),
            Some(json!({ "quantity": 2 })),
            Some(&ann),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let cart = app.request("GET", "/api/shopping_cart", None, Some(&bob)).await;
    assert_eq!(cart.status, StatusCode::OK);
    assert_eq!(cart.body, json!([]));
}

#[tokio::test]
async fn test_insufficient_stock_changes_nothing() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let kiwis = app.stock_item(&admin, "Kiwis", 3, 1).await;
    let user = app.user_token("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            &format!("/api/item/{kiwis}"),
            Some(json!({ "quantity": 4 })),
            Some(&user),
        )
        .await;
    response.assert_error(StatusCode::BAD_REQUEST, "INSUFFICIENT_STOCK");

    assert_eq!(app.available(&kiwis).await, 3);
    let cart = app
        .request("GET", "/api/shopping_cart", None, Some(&user))
        .await;
    assert_eq!(cart.body, json!([]));
}

#[tokio::test]
async fn test_invalid_reservations_are_rejected() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let figs = app.stock_item(&admin, "Figs", 3, 1).await;
    let user = app.user_token("ann@homefruits.test").await;

    let zero = app
        .request(
            "POST",
            &format!("/api/item/{figs}"),
            Some(json!({ "quantity": 0 })),
            Some(&user),
        )
        .await;
    zero.assert_error(StatusCode::BAD_REQUEST, "BAD_REQUEST");

    let unknown = app
        .request(
            "POST",
            &format!("/api/item/{}", uuid::Uuid::new_v4()),
            Some(json!({ "quantity": 1 })),
            Some(&user),
        )
        .await;
    unknown.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");

    let bad_id = app
        .request(
            "POST",
            "/api/item/not-a-uuid",
            Some(json!({ "quantity": 1 })),
            Some(&user),
        )
        .await;
    bad_id.assert_error(StatusCode::BAD_REQUEST, "BAD_REQUEST");

    let anonymous = app
        .request(
            "POST",
            &format!("/api/item/{figs}"),
            Some(json!({ "quantity": 1 })),
            None,
        )
        .await;
    anonymous.assert_error(StatusCode::UNAUTHORIZED, "UNAUTHORIZED");

    assert_eq!(app.available(&figs).await, 3);
}

#[tokio::test]
async fn test_release_restores_stock() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let plums = app.stock_item(&admin, "Plums", 8, 2).await;
    let user = app.user_token("ann@homefruits.test").await;

    let response = app
        .request(
            "POST",
            &format!("/api/item/{plums}"),
            Some(json!({ "quantity": 5 })),
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(app.available(&plums).await, 3);

    let released = app
        .request("DELETE", &format!("/api/item/{plums}"), None, Some(&user))
        .await;
    assert_eq!(released.status, StatusCode::NO_CONTENT);
    assert_eq!(app.available(&plums).await, 8);

    let again = app
        .request("DELETE", &format!("/api/item/{plums}"), None, Some(&user))
        .await;
    again.assert_error(StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_legacy_delete_route_releases() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let limes = app.stock_item(&admin, "Limes", 4, 1).await;
    let user = app.user_token("ann@homefruits.test").await;

    app.request(
        "POST",
        &format!("/api/item/{limes}"),
        Some(json!({ "quantity": 4 })),
        Some(&user),
    )
    .await;
    assert_eq!(app.available(&limes).await, 0);

    let released = app
        .request("GET", &format!("/api/delete/{limes}"), None, Some(&user))
        .await;
    assert_eq!(released.status, StatusCode::NO_CONTENT);
    assert_eq!(app.available(&limes).await, 4);
}

#[tokio::test]
async fn test_repeated_reservations_accumulate() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let apples = app.stock_item(&admin, "Apples", 10, 3).await;
    let user = app.user_token("ann@homefruits.test").await;
    let path = format!("/api/item/{apples}");

    let first = app
        .request("POST", &path, Some(json!({ "quantity": 3 })), Some(&user))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", &path, Some(json!({ "quantity": 2 })), Some(&user))
        .await;
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.body["quantity"], 5);
    assert_eq!(second.body["cost"], 15);

    let too_many = app
        .request("POST", &path, Some(json!({ "quantity": 6 })), Some(&user))
        .await;
    too_many.assert_error(StatusCode::BAD_REQUEST, "INSUFFICIENT_STOCK");

    assert_eq!(app.available(&apples).await, 5);

    let cart = app
        .request("GET", "/api/shopping_cart", None, Some(&user))
        .await;
    let lines = cart.body.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 5);
    assert_eq!(lines[0]["cost"], 15);
}

#[tokio::test]
async fn test_concurrent_reservations_never_oversell() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let mangos = app.stock_item(&admin, "Mangos", 3, 4).await;

    let mut tokens = Vec::new();
    for i in 0..5 {
        tokens.push(app.user_token(&format!("user{i}@homefruits.test")).await);
    }

    let path = format!("/api/item/{mangos}");
    let attempts = tokens.iter().map(|token| {
        app.request("POST", &path, Some(json!({ "quantity": 1 })), Some(token))
    });
    let responses = join_all(attempts).await;

    let created = responses
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    assert_eq!(created, 3);
    for response in responses.iter().filter(|r| r.status != StatusCode::CREATED) {
        response.assert_error(StatusCode::BAD_REQUEST, "INSUFFICIENT_STOCK");
    }

    assert_eq!(app.available(&mangos).await, 0);
}
