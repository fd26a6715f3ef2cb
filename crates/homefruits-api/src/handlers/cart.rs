//! Shopping cart handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::CartLineResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/shopping_cart
pub async fn get_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CartLineResponse>>> {
    let lines = state.catalog.get_cart(*auth).await?;
    Ok(Json(lines.into_iter().map(CartLineResponse::from).collect()))
}
