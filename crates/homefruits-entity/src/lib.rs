//! # homefruits-entity
//!
//! Domain entity models for HomeFruits. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod cart;
pub mod item;
pub mod token;
pub mod user;
