//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use homefruits_auth::{AccessToken, SessionTokens};
use homefruits_entity::cart::CartLine;
use homefruits_entity::item::Item;
use homefruits_entity::user::UserProfile;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Active storage backend.
    pub storage: String,
}

/// Catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Item ID.
    pub id: Uuid,
    /// Name.
    pub name: String,
    /// Available quantity.
    pub quantity: i32,
    /// Unit cost.
    pub cost: i32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.into_uuid(),
            name: item.name,
            quantity: item.quantity,
            cost: item.cost,
        }
    }
}

/// One cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineResponse {
    /// Reserved item.
    pub item_id: Uuid,
    /// Item name at reservation time.
    pub item_name: String,
    /// Reserved quantity.
    pub quantity: i32,
    /// Line cost.
    pub cost: i32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            item_id: line.item_id.into_uuid(),
            item_name: line.item_name,
            quantity: line.quantity,
            cost: line.cost,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id.into_uuid(),
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Registration and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token.
    pub refresh_token: String,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

impl From<SessionTokens> for SessionResponse {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            access_expires_at: tokens.access_expires_at,
            refresh_token: tokens.refresh_token,
            refresh_expires_at: tokens.refresh_expires_at,
            user: tokens.user.into(),
        }
    }
}

/// Token refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// New access token.
    pub access_token: String,
    /// Its expiration.
    pub expires_at: DateTime<Utc>,
}

impl From<AccessToken> for RefreshResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.token,
            expires_at: token.expires_at,
        }
    }
}
