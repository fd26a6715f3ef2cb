//! `AuthUser` and `AdminUser` extractors: bearer token to verified identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use homefruits_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The user authenticated by the request's bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl std::ops::Deref for AuthUser {
    type Target = UserId;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = state.guard.authorize(&parts.headers)?;
        Ok(AuthUser(user_id))
    }
}

/// The configured administrator, authenticated by bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub UserId);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = state.guard.authorize_admin(&parts.headers).await?;
        Ok(AdminUser(user_id))
    }
}
