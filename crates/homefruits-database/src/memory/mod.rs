//! In-memory store implementations.
//!
//! Used by tests and by the `memory` storage backend. State lives behind
//! tokio mutexes and is lost when the process exits.

pub mod inventory;
pub mod token;
pub mod user;

pub use inventory::MemoryInventoryStore;
pub use token::MemoryTokenStore;
pub use user::MemoryUserStore;
