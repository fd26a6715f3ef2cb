//! Health check handler.

use axum::Json;
use axum::extract::State;

use homefruits_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    if !state.stores.health_check().await? {
        return Err(AppError::storage("Storage health check failed").into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.stores.backend_name().to_string(),
    }))
}
