//! Catalog and cart repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use homefruits_core::error::{AppError, ErrorKind};
use homefruits_core::result::AppResult;
use homefruits_core::types::{ItemId, UserId};
use homefruits_entity::cart::CartLine;
use homefruits_entity::item::{Item, NewItem};

use crate::traits::{InventoryStore, InventoryTx};

/// PostgreSQL-backed [`InventoryStore`].
///
/// Stock movements run inside a transaction that takes a row lock on the
/// item (`SELECT ... FOR UPDATE`), so concurrent reservations of the same
/// item serialize on that row.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    /// Create a new inventory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for InventoryRepository {
    async fn get_item(&self, id: ItemId) -> AppResult<Item> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to find item", e))?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    async fn get_all_items(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to list items", e))
    }

    async fn insert_item(&self, item: &NewItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, quantity, cost) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.cost)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to insert item", e))
    }

    async fn get_cart(&self, user_id: UserId) -> AppResult<Vec<CartLine>> {
        sqlx::query_as::<_, CartLine>(
            "SELECT * FROM cart_lines WHERE user_id = $1 ORDER BY item_name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to load cart", e))
    }

    async fn begin(&self) -> AppResult<Box<dyn InventoryTx>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to begin transaction", e))?;
        Ok(Box::new(PgInventoryTx { tx }))
    }
}

/// A stock movement running in a PostgreSQL transaction.
///
/// Dropping it without [`InventoryTx::commit`] rolls the transaction back.
struct PgInventoryTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl InventoryTx for PgInventoryTx {
    async fn lock_item(&mut self, id: ItemId) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to lock item", e))
    }

    async fn find_cart_line(
        &mut self,
        item_id: ItemId,
        user_id: UserId,
    ) -> AppResult<Option<CartLine>> {
        sqlx::query_as::<_, CartLine>(
            "SELECT * FROM cart_lines WHERE item_id = $1 AND user_id = $2",
        )
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to find cart line", e))
    }

    async fn upsert_cart_line(&mut self, line: &CartLine) -> AppResult<CartLine> {
        sqlx::query_as::<_, CartLine>(
            "INSERT INTO cart_lines (item_id, user_id, item_name, quantity, cost) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (item_id, user_id) DO UPDATE \
             SET item_name = EXCLUDED.item_name, quantity = EXCLUDED.quantity, cost = EXCLUDED.cost \
             RETURNING *",
        )
        .bind(line.item_id)
        .bind(line.user_id)
        .bind(&line.item_name)
        .bind(line.quantity)
        .bind(line.cost)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to write cart line", e))
    }

    async fn delete_cart_line(
        &mut self,
        item_id: ItemId,
        user_id: UserId,
    ) -> AppResult<Option<CartLine>> {
        sqlx::query_as::<_, CartLine>(
            "DELETE FROM cart_lines WHERE item_id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to delete cart line", e))
    }

    async fn update_item_quantity(&mut self, id: ItemId, quantity: i32) -> AppResult<()> {
        sqlx::query("UPDATE items SET quantity = $2 WHERE id = $1")
            .bind(id)
            .bind(quantity)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to update item quantity", e)
            })?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to commit transaction", e))
    }
}
