//! Refresh token repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use homefruits_core::error::{AppError, ErrorKind};
use homefruits_core::result::AppResult;
use homefruits_core::types::UserId;
use homefruits_entity::token::{RefreshToken, RefreshTokenRow};

use crate::traits::TokenStore;

/// PostgreSQL-backed [`TokenStore`].
#[derive(Debug, Clone)]
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    /// Create a new refresh token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenStore for RefreshTokenRepository {
    async fn insert_refresh_token(
        &self,
        token: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            "INSERT INTO refresh_tokens (token, user_id, expires_at) VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to insert refresh token", e))?;

        Ok(row.into())
    }

    async fn get_refresh_token(&self, token: &str) -> AppResult<RefreshToken> {
        sqlx::query_as::<_, RefreshTokenRow>("SELECT * FROM refresh_tokens WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to fetch refresh token", e)
            })?
            .map(RefreshToken::from)
            .ok_or_else(|| AppError::not_found("Refresh token not found"))
    }

    async fn revoke_refresh_token(&self, token: &str, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "UPDATE refresh_tokens SET revoked_at = $2 WHERE token = $1 AND revoked_at IS NULL",
        )
        .bind(token)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to revoke refresh token", e))?;
        Ok(())
    }
}
