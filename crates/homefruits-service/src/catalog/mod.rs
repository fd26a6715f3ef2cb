//! Catalog browsing, stocking and cart listing.

pub mod service;

pub use service::CatalogService;
