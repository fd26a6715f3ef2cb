//! Catalog item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use homefruits_core::types::ItemId;

/// A catalog item with its currently available stock.
///
/// `quantity` is only changed by the reservation engine once the item is
/// stocked; it never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Available (unreserved) quantity.
    pub quantity: i32,
    /// Unit cost in the smallest currency unit.
    pub cost: i32,
    /// When the item was stocked.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Whether `requested` units can be reserved right now.
    pub fn has_stock_for(&self, requested: i32) -> bool {
        requested <= self.quantity
    }
}

/// Data required to stock a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    /// Display name.
    pub name: String,
    /// Initial stocked quantity.
    pub quantity: i32,
    /// Unit cost.
    pub cost: i32,
}
