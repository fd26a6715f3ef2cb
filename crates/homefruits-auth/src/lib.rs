//! # homefruits-auth
//!
//! Authentication and session lifecycle for HomeFruits.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: HS256 access token signing, verification and bearer extraction
//! - `refresh`: opaque refresh token issuance, validation and revocation
//! - `session`: registration, login and refresh orchestration
//! - `guard`: request authorization with an optional admin check

pub mod guard;
pub mod jwt;
pub mod password;
pub mod refresh;
pub mod session;

pub use guard::AccessGuard;
pub use jwt::{AccessToken, Claims, TokenSigner, bearer_token};
pub use password::PasswordHasher;
pub use refresh::RefreshTokenStore;
pub use session::{SessionManager, SessionTokens};
