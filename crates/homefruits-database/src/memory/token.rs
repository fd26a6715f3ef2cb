//! In-memory refresh token store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use homefruits_core::error::AppError;
use homefruits_core::result::AppResult;
use homefruits_core::types::UserId;
use homefruits_entity::token::{RefreshToken, RefreshTokenState};

use crate::traits::TokenStore;

/// [`TokenStore`] kept in process memory, keyed by token value.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<String, RefreshToken>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn insert_refresh_token(
        &self,
        token: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RefreshToken> {
        let mut tokens = self.tokens.lock().await;
        if tokens.contains_key(token) {
            return Err(AppError::storage("Refresh token already exists"));
        }

        let record = RefreshToken {
            token: token.to_string(),
            user_id,
            created_at: Utc::now(),
            expires_at,
            state: RefreshTokenState::Active,
        };
        tokens.insert(record.token.clone(), record.clone());
        Ok(record)
    }

    async fn get_refresh_token(&self, token: &str) -> AppResult<RefreshToken> {
        self.tokens
            .lock()
            .await
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::not_found("Refresh token not found"))
    }

    async fn revoke_refresh_token(&self, token: &str, at: DateTime<Utc>) -> AppResult<()> {
        if let Some(record) = self.tokens.lock().await.get_mut(token) {
            if record.state == RefreshTokenState::Active {
                record.state = RefreshTokenState::Revoked { at };
            }
        }
        Ok(())
    }
}
