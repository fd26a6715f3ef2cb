//! Catalog listing and stock reservation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::ReserveRequest;
use crate::dto::response::{CartLineResponse, ItemResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_item_id};
use crate::state::AppState;

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<ItemResponse>>> {
    let items = state.catalog.list_items().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /api/item/{item_id}
pub async fn reserve_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<String>,
    ValidatedJson(req): ValidatedJson<ReserveRequest>,
) -> ApiResult<(StatusCode, Json<CartLineResponse>)> {
    let item_id = parse_item_id(&item_id)?;
    let line = state
        .reservations
        .reserve(item_id, *auth, req.quantity)
        .await?;

    Ok((StatusCode::CREATED, Json(line.into())))
}

/// DELETE /api/item/{item_id}, also GET /api/delete/{item_id}
pub async fn release_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(item_id): Path<String>,
) -> ApiResult<StatusCode> {
    let item_id = parse_item_id(&item_id)?;
    state.reservations.release(item_id, *auth).await?;
    Ok(StatusCode::NO_CONTENT)
}
