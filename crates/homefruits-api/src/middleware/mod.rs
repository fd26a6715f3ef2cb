//! Tower layers applied to the whole application.

pub mod cors;

pub use cors::build_cors_layer;
