//! # homefruits-database
//!
//! Store traits consumed by the auth and service layers, with a PostgreSQL
//! implementation (`repositories`) and an in-memory implementation
//! (`memory`) that share the same transactional semantics.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;
pub mod traits;

pub use connection::DatabasePool;
pub use stores::Stores;
pub use traits::{InventoryStore, InventoryTx, TokenStore, UserStore};
