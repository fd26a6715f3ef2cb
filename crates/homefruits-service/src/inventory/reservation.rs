//! Atomic reservation and release of item stock.

use std::sync::Arc;

use tracing::{debug, info};

use homefruits_core::error::AppError;
use homefruits_core::types::{ItemId, UserId};
use homefruits_database::InventoryStore;
use homefruits_entity::cart::CartLine;

/// Moves quantity between an item's available stock and a user's cart line.
///
/// Every movement runs in one store transaction that locks the item first,
/// so for each item `available + reserved` stays equal to what was stocked
/// and concurrent reservations never oversell.
#[derive(Clone)]
pub struct ReservationEngine {
    inventory: Arc<dyn InventoryStore>,
}

impl std::fmt::Debug for ReservationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationEngine").finish()
    }
}

impl ReservationEngine {
    /// Creates a reservation engine over an inventory store.
    pub fn new(inventory: Arc<dyn InventoryStore>) -> Self {
        Self { inventory }
    }

    /// Reserves `quantity` units of an item into the user's cart.
    ///
    /// Repeated reservations accumulate on the same cart line and the line
    /// cost is recomputed from the current unit cost and the new total.
    /// Nothing changes if there is not enough stock.
    pub async fn reserve(
        &self,
        item_id: ItemId,
        user_id: UserId,
        quantity: i32,
    ) -> Result<CartLine, AppError> {
        if quantity < 1 {
            return Err(AppError::decode("Quantity must be at least 1"));
        }

        let mut tx = self.inventory.begin().await?;

        let item = tx
            .lock_item(item_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {item_id} not found")))?;

        if !item.has_stock_for(quantity) {
            debug!(
                item_id = %item_id,
                requested = quantity,
                available = item.quantity,
                "Reservation rejected"
            );
            return Err(AppError::insufficient_stock(format!(
                "Only {} of {} available",
                item.quantity, item.name
            )));
        }

        let already_reserved = tx
            .find_cart_line(item_id, user_id)
            .await?
            .map(|line| line.quantity)
            .unwrap_or(0);
        let total = already_reserved
            .checked_add(quantity)
            .ok_or_else(|| AppError::decode("Quantity is too large"))?;
        let cost = CartLine::line_cost(item.cost, total)
            .ok_or_else(|| AppError::decode("Line cost is too large"))?;

        let line = tx
            .upsert_cart_line(&CartLine {
                item_id,
                user_id,
                item_name: item.name.clone(),
                quantity: total,
                cost,
            })
            .await?;
        tx.update_item_quantity(item_id, item.quantity - quantity)
            .await?;
        tx.commit().await?;

        info!(
            item_id = %item_id,
            user_id = %user_id,
            quantity,
            remaining = item.quantity - quantity,
            "Stock reserved"
        );
        Ok(line)
    }

    /// Returns the user's whole cart line for an item to available stock.
    ///
    /// Yields the released quantity. Fails with `NotFound` if the item or
    /// the cart line does not exist.
    pub async fn release(&self, item_id: ItemId, user_id: UserId) -> Result<i32, AppError> {
        let mut tx = self.inventory.begin().await?;

        let item = tx
            .lock_item(item_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {item_id} not found")))?;

        let line = tx
            .delete_cart_line(item_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item is not in the cart"))?;

        tx.update_item_quantity(item_id, item.quantity + line.quantity)
            .await?;
        tx.commit().await?;

        info!(
            item_id = %item_id,
            user_id = %user_id,
            quantity = line.quantity,
            "Stock released"
        );
        Ok(line.quantity)
    }
}
