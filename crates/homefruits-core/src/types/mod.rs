//! Core type definitions used across the HomeFruits workspace.

pub mod id;

pub use id::*;
