//! Refresh token issuance, validation and revocation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::{debug, info};

use homefruits_core::error::{AppError, ErrorKind};
use homefruits_core::types::UserId;
use homefruits_database::TokenStore;
use homefruits_entity::token::RefreshToken;

/// Number of random bytes in a refresh token before hex encoding.
const TOKEN_BYTES: usize = 32;

/// Issues and tracks opaque refresh tokens.
///
/// Tokens are 256 bits from the OS random source, hex encoded. Validity is
/// held by the backing [`TokenStore`]; this type adds nothing in memory.
#[derive(Clone)]
pub struct RefreshTokenStore {
    tokens: Arc<dyn TokenStore>,
    ttl: Duration,
}

impl std::fmt::Debug for RefreshTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenStore")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl RefreshTokenStore {
    /// Creates a store issuing tokens that live for `ttl`.
    pub fn new(tokens: Arc<dyn TokenStore>, ttl: Duration) -> Self {
        Self { tokens, ttl }
    }

    /// Issues and persists a new active token for `user_id`.
    pub async fn issue(&self, user_id: UserId) -> Result<RefreshToken, AppError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| AppError::internal(format!("OS random source failed: {e}")))?;
        let token = hex::encode(bytes);

        let expires_at = Utc::now() + self.ttl;
        let record = self
            .tokens
            .insert_refresh_token(&token, user_id, expires_at)
            .await?;

        debug!(user_id = %user_id, expires_at = %expires_at, "Refresh token issued");
        Ok(record)
    }

    /// Loads a token record. Fails with `NotFound` if it was never issued.
    pub async fn validate(&self, token: &str) -> Result<RefreshToken, AppError> {
        self.tokens.get_refresh_token(token).await
    }

    /// Loads a token and checks it can still mint access tokens.
    ///
    /// Unknown, expired and revoked tokens all fail with `Unauthorized`.
    pub async fn validate_usable(&self, token: &str) -> Result<RefreshToken, AppError> {
        let record = self.validate(token).await.map_err(|e| match e.kind {
            ErrorKind::NotFound => {
                AppError::unauthorized("Unknown refresh token")
            }
            _ => e,
        })?;

        if !record.is_usable_at(Utc::now()) {
            debug!(
                user_id = %record.user_id,
                revoked = record.is_revoked(),
                "Refresh token is no longer usable"
            );
            return Err(AppError::unauthorized("Refresh token expired or revoked"));
        }

        Ok(record)
    }

    /// Revokes a token. Already revoked and unknown tokens are left as is.
    pub async fn revoke(&self, token: &str) -> Result<(), AppError> {
        self.tokens.revoke_refresh_token(token, Utc::now()).await?;
        info!("Refresh token revoked");
        Ok(())
    }
}
