//! In-memory catalog and cart store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use homefruits_core::error::AppError;
use homefruits_core::result::AppResult;
use homefruits_core::types::{ItemId, UserId};
use homefruits_entity::cart::CartLine;
use homefruits_entity::item::{Item, NewItem};

use crate::traits::{InventoryStore, InventoryTx};

#[derive(Debug, Clone, Default)]
struct InventoryState {
    items: HashMap<ItemId, Item>,
    cart: HashMap<(ItemId, UserId), CartLine>,
}

/// [`InventoryStore`] kept in process memory.
///
/// A transaction holds the whole store lock from `begin` until it is
/// committed or dropped, and works on a private copy of the state. Readers
/// therefore never see a half-applied stock movement.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventoryStore {
    state: Arc<Mutex<InventoryState>>,
}

impl MemoryInventoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn get_item(&self, id: ItemId) -> AppResult<Item> {
        self.state
            .lock()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    async fn get_all_items(&self) -> AppResult<Vec<Item>> {
        let mut items: Vec<Item> = self.state.lock().await.items.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.0.cmp(&b.id.0)));
        Ok(items)
    }

    async fn insert_item(&self, item: &NewItem) -> AppResult<Item> {
        let stocked = Item {
            id: ItemId::new(),
            name: item.name.clone(),
            quantity: item.quantity,
            cost: item.cost,
            created_at: Utc::now(),
        };
        self.state
            .lock()
            .await
            .items
            .insert(stocked.id, stocked.clone());
        Ok(stocked)
    }

    async fn get_cart(&self, user_id: UserId) -> AppResult<Vec<CartLine>> {
        let mut lines: Vec<CartLine> = self
            .state
            .lock()
            .await
            .cart
            .values()
            .filter(|line| line.user_id == user_id)
            .cloned()
            .collect();
        lines.sort_by(|a, b| a.item_name.cmp(&b.item_name));
        Ok(lines)
    }

    async fn begin(&self) -> AppResult<Box<dyn InventoryTx>> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryInventoryTx { guard, staged }))
    }
}

struct MemoryInventoryTx {
    guard: OwnedMutexGuard<InventoryState>,
    staged: InventoryState,
}

#[async_trait]
impl InventoryTx for MemoryInventoryTx {
    async fn lock_item(&mut self, id: ItemId) -> AppResult<Option<Item>> {
        Ok(self.staged.items.get(&id).cloned())
    }

    async fn find_cart_line(
        &mut self,
        item_id: ItemId,
        user_id: UserId,
    ) -> AppResult<Option<CartLine>> {
        Ok(self.staged.cart.get(&(item_id, user_id)).cloned())
    }

    async fn upsert_cart_line(&mut self, line: &CartLine) -> AppResult<CartLine> {
        self.staged
            .cart
            .insert((line.item_id, line.user_id), line.clone());
        Ok(line.clone())
    }

    async fn delete_cart_line(
        &mut self,
        item_id: ItemId,
        user_id: UserId,
    ) -> AppResult<Option<CartLine>> {
        Ok(self.staged.cart.remove(&(item_id, user_id)))
    }

    async fn update_item_quantity(&mut self, id: ItemId, quantity: i32) -> AppResult<()> {
        let item = self
            .staged
            .items
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
        item.quantity = quantity;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryInventoryTx { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}
