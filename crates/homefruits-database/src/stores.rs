//! Backend-agnostic bundle of store handles.

use std::sync::Arc;

use homefruits_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryInventoryStore, MemoryTokenStore, MemoryUserStore};
use crate::repositories::{InventoryRepository, RefreshTokenRepository, UserRepository};
use crate::traits::{InventoryStore, TokenStore, UserStore};

/// Every store the application needs, behind trait objects.
#[derive(Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Catalog items and cart lines.
    pub inventory: Arc<dyn InventoryStore>,
    /// Refresh tokens.
    pub tokens: Arc<dyn TokenStore>,
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Stores backed by PostgreSQL.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pg.clone())),
            inventory: Arc::new(InventoryRepository::new(pg.clone())),
            tokens: Arc::new(RefreshTokenRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            inventory: Arc::new(MemoryInventoryStore::new()),
            tokens: Arc::new(MemoryTokenStore::new()),
            pool: None,
        }
    }

    /// Check that the backend is reachable. Always true in memory.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Name of the active backend, for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("backend", &self.backend_name())
            .finish()
    }
}
