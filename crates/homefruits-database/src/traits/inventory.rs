//! Catalog and cart persistence.
//!
//! Reads that only observe state go through [`InventoryStore`] directly.
//! Anything that moves stock between an item and a cart line goes through an
//! [`InventoryTx`]: the item row is locked by [`InventoryTx::lock_item`] and
//! every write becomes visible together on [`InventoryTx::commit`]. Dropping
//! a transaction without committing discards all of its writes.

use async_trait::async_trait;

use homefruits_core::result::AppResult;
use homefruits_core::types::{ItemId, UserId};
use homefruits_entity::cart::CartLine;
use homefruits_entity::item::{Item, NewItem};

/// Catalog and cart storage.
#[async_trait]
pub trait InventoryStore: Send + Sync + 'static {
    /// Fetch one item. Fails with `NotFound` if absent.
    async fn get_item(&self, id: ItemId) -> AppResult<Item>;

    /// List every catalog item.
    async fn get_all_items(&self) -> AppResult<Vec<Item>>;

    /// Stock a new item.
    async fn insert_item(&self, item: &NewItem) -> AppResult<Item>;

    /// List a user's cart lines.
    async fn get_cart(&self, user_id: UserId) -> AppResult<Vec<CartLine>>;

    /// Open a transaction for a stock movement.
    async fn begin(&self) -> AppResult<Box<dyn InventoryTx>>;
}

/// A single all-or-nothing stock movement.
#[async_trait]
pub trait InventoryTx: Send {
    /// Load an item and hold its lock until commit or drop.
    async fn lock_item(&mut self, id: ItemId) -> AppResult<Option<Item>>;

    /// Fetch the cart line for `(item_id, user_id)`.
    async fn find_cart_line(
        &mut self,
        item_id: ItemId,
        user_id: UserId,
    ) -> AppResult<Option<CartLine>>;

    /// Insert the line, or overwrite quantity, cost and name of the existing
    /// line with the same `(item_id, user_id)`.
    async fn upsert_cart_line(&mut self, line: &CartLine) -> AppResult<CartLine>;

    /// Remove the cart line and return it, if present.
    async fn delete_cart_line(
        &mut self,
        item_id: ItemId,
        user_id: UserId,
    ) -> AppResult<Option<CartLine>>;

    /// Set an item's available quantity.
    async fn update_item_quantity(&mut self, id: ItemId, quantity: i32) -> AppResult<()>;

    /// Publish every write made in this transaction.
    async fn commit(self: Box<Self>) -> AppResult<()>;
}
