//! Cart line entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use homefruits_core::types::{ItemId, UserId};

/// Quantity of one item reserved by one user.
///
/// Identified by `(item_id, user_id)`. The name and cost are snapshots taken
/// when the reservation was made and are not recomputed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CartLine {
    /// Reserved item.
    pub item_id: ItemId,
    /// Owner of the reservation.
    pub user_id: UserId,
    /// Item name at reservation time.
    pub item_name: String,
    /// Reserved quantity.
    pub quantity: i32,
    /// Unit cost multiplied by `quantity`.
    pub cost: i32,
}

impl CartLine {
    /// Line cost for `quantity` units at `unit_cost`, or `None` if it does
    /// not fit in the cost column.
    pub fn line_cost(unit_cost: i32, quantity: i32) -> Option<i32> {
        unit_cost.checked_mul(quantity)
    }
}
