//! Storage traits implemented by every backend.

pub mod inventory;
pub mod token;
pub mod user;

pub use inventory::{InventoryStore, InventoryTx};
pub use token::TokenStore;
pub use user::UserStore;
