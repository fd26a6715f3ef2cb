//! # homefruits-service
//!
//! Business logic service layer for HomeFruits. Each service orchestrates
//! the store traits from `homefruits-database` to implement one group of
//! application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod catalog;
pub mod inventory;

pub use catalog::CatalogService;
pub use inventory::ReservationEngine;
