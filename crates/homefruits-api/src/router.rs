//! Route definitions for the HomeFruits HTTP API.
//!
//! Public and user routes are mounted under `/api`, admin routes under
//! `/admin`. The router receives `AppState` and passes it to all handlers
//! via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(item_routes())
        .merge(cart_routes());

    Router::new()
        .nest("/api", api_routes)
        .nest("/admin", admin_routes())
        .with_state(state)
}

/// Liveness check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Registration, login and access token refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/reg", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
}

/// Catalog listing and reservations
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(handlers::item::list_items))
        .route(
            "/item/{item_id}",
            post(handlers::item::reserve_item).delete(handlers::item::release_item),
        )
        .route("/delete/{item_id}", get(handlers::item::release_item))
}

/// The caller's cart
fn cart_routes() -> Router<AppState> {
    Router::new().route("/shopping_cart", get(handlers::cart::get_cart))
}

/// Admin-only stocking and token revocation
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/item", post(handlers::admin::insert_item))
        .route(
            "/revoke/{token}",
            post(handlers::admin::revoke_token).get(handlers::admin::revoke_token),
        )
}
