//! Registration, login and refresh flows.

pub mod manager;

pub use manager::{SessionManager, SessionTokens};
