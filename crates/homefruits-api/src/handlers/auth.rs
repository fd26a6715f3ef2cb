//! Auth handlers: register, login, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{CredentialsRequest, RefreshRequest};
use crate::dto::response::{RefreshResponse, SessionResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/reg
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let tokens = state
        .session_manager
        .register(&req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(tokens.into())))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let tokens = state.session_manager.login(&req.email, &req.password).await?;
    Ok(Json(tokens.into()))
}

/// POST /api/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<RefreshResponse>> {
    let access = state.session_manager.refresh(&req.refresh_token).await?;
    Ok(Json(access.into()))
}
