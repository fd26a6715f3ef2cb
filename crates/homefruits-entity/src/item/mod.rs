//! Catalog item entities.

pub mod model;

pub use model::{Item, NewItem};
