//! Refresh token entities.

pub mod refresh;

pub use refresh::{RefreshToken, RefreshTokenRow, RefreshTokenState};
