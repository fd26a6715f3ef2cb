//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use homefruits_entity::item::NewItem;

/// Registration and login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Reservation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReserveRequest {
    /// Units to add to the cart.
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Admin item creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewItemRequest {
    /// Display name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Initial stocked quantity.
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Unit cost.
    #[validate(range(min = 0))]
    pub cost: i32,
}

impl From<NewItemRequest> for NewItem {
    fn from(req: NewItemRequest) -> Self {
        Self {
            name: req.name,
            quantity: req.quantity,
            cost: req.cost,
        }
    }
}
