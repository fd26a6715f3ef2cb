//! HTTP request handlers grouped by domain.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod health;
pub mod item;
