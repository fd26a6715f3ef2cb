//! Refresh token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use homefruits_core::result::AppResult;
use homefruits_core::types::UserId;
use homefruits_entity::token::RefreshToken;

/// Persistence operations for opaque refresh tokens.
///
/// Token values are unique; inserting an existing value is a storage error.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Persist a new, unrevoked token.
    async fn insert_refresh_token(
        &self,
        token: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshToken>;

    /// Fetch a token record. Fails with `NotFound` if absent.
    async fn get_refresh_token(&self, token: &str) -> AppResult<RefreshToken>;

    /// Set `revoked_at` if it is not already set.
    ///
    /// Unknown tokens and already revoked tokens are left untouched and the
    /// call still succeeds.
    async fn revoke_refresh_token(&self, token: &str, at: DateTime<Utc>) -> AppResult<()>;
}
