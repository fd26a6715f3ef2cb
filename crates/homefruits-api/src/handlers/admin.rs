//! Admin handlers: stock items and revoke refresh tokens.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::dto::request::NewItemRequest;
use crate::dto::response::ItemResponse;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ValidatedJson};
use crate::state::AppState;

/// POST /admin/item
pub async fn insert_item(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ValidatedJson(req): ValidatedJson<NewItemRequest>,
) -> ApiResult<(StatusCode, Json<ItemResponse>)> {
    let item = state.catalog.insert_item(req.into()).await?;
    info!(admin_id = %admin, item_id = %item.id, "Admin stocked item");
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// POST /admin/revoke/{token}, also GET
pub async fn revoke_token(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(token): Path<String>,
) -> ApiResult<StatusCode> {
    state.session_manager.revoke(&token).await?;
    info!(admin_id = %admin, "Admin revoked refresh token");
    Ok(StatusCode::NO_CONTENT)
}
