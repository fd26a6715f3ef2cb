//! Refresh token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use homefruits_core::types::UserId;

/// Revocation state of a refresh token.
///
/// `Revoked` is terminal: no operation moves a token back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RefreshTokenState {
    /// The token has not been revoked.
    Active,
    /// The token was revoked at the given time.
    Revoked {
        /// Revocation time.
        at: DateTime<Utc>,
    },
}

impl RefreshTokenState {
    /// Builds the state from the nullable `revoked_at` column.
    pub fn from_revoked_at(revoked_at: Option<DateTime<Utc>>) -> Self {
        match revoked_at {
            Some(at) => Self::Revoked { at },
            None => Self::Active,
        }
    }

    /// The nullable column representation of this state.
    pub fn revoked_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Active => None,
            Self::Revoked { at } => Some(*at),
        }
    }
}

/// A persisted opaque refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Hex-encoded random token value.
    pub token: String,
    /// Owner of the token.
    pub user_id: UserId,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
    /// Revocation state.
    pub state: RefreshTokenState,
}

impl RefreshToken {
    /// Whether the token may mint a new access token at `now`.
    ///
    /// Both conditions are evaluated together: a revoked token is never
    /// usable, and neither is an expired one.
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        match self.state {
            RefreshTokenState::Revoked { .. } => false,
            RefreshTokenState::Active => now <= self.expires_at,
        }
    }

    /// Whether the token has been revoked.
    pub fn is_revoked(&self) -> bool {
        matches!(self.state, RefreshTokenState::Revoked { .. })
    }
}

/// Row shape of the `refresh_tokens` table.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenRow {
    /// Token value (primary key).
    pub token: String,
    /// Owner.
    pub user_id: UserId,
    /// Issue time.
    pub created_at: DateTime<Utc>,
    /// Expiry.
    pub expires_at: DateTime<Utc>,
    /// Revocation time, if revoked.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        Self {
            token: row.token,
            user_id: row.user_id,
            created_at: row.created_at,
            expires_at: row.expires_at,
            state: RefreshTokenState::from_revoked_at(row.revoked_at),
        }
    }
}
