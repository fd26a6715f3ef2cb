//! PostgreSQL implementations of the store traits.

pub mod inventory;
pub mod token;
pub mod user;

pub use inventory::InventoryRepository;
pub use token::RefreshTokenRepository;
pub use user::UserRepository;
