//! Shopping cart entities.

pub mod model;

pub use model::CartLine;
