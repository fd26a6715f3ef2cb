//! # homefruits-api
//!
//! HTTP API layer for HomeFruits built on Axum.
//!
//! Provides the REST endpoints, auth extractors, DTOs, CORS and request
//! tracing layers, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
