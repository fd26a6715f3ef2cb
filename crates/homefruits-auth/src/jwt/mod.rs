//! Access token signing, verification and bearer header extraction.

pub mod bearer;
pub mod claims;
pub mod signer;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use signer::{AccessToken, TokenSigner};
