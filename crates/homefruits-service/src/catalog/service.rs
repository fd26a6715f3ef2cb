//! Catalog service: item listing, admin stocking and cart views.

use std::sync::Arc;

use tracing::info;

use homefruits_core::error::AppError;
use homefruits_core::types::UserId;
use homefruits_database::InventoryStore;
use homefruits_entity::cart::CartLine;
use homefruits_entity::item::{Item, NewItem};

/// Read access to the catalog and carts, plus item insertion.
#[derive(Clone)]
pub struct CatalogService {
    inventory: Arc<dyn InventoryStore>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish()
    }
}

impl CatalogService {
    /// Creates a catalog service.
    pub fn new(inventory: Arc<dyn InventoryStore>) -> Self {
        Self { inventory }
    }

    /// Lists every item with its available quantity.
    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.inventory.get_all_items().await
    }

    /// Stocks a new item.
    pub async fn insert_item(&self, item: NewItem) -> Result<Item, AppError> {
        if item.name.trim().is_empty() {
            return Err(AppError::decode("Item name must not be empty"));
        }
        if item.quantity < 0 {
            return Err(AppError::decode("Item quantity must not be negative"));
        }
        if item.cost < 0 {
            return Err(AppError::decode("Item cost must not be negative"));
        }

        let stocked = self.inventory.insert_item(&item).await?;
        info!(
            item_id = %stocked.id,
            name = %stocked.name,
            quantity = stocked.quantity,
            cost = stocked.cost,
            "Item stocked"
        );
        Ok(stocked)
    }

    /// Lists the user's cart lines.
    pub async fn get_cart(&self, user_id: UserId) -> Result<Vec<CartLine>, AppError> {
        self.inventory.get_cart(user_id).await
    }
}
