//! JWT claims carried by every access token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use homefruits_core::error::AppError;
use homefruits_core::types::UserId;

/// Access token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer.
    pub iss: String,
    /// Subject: the user id as a UUID string.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id, so two tokens issued in the same second differ.
    pub jti: String,
}

impl Claims {
    /// Parses the subject into a user id.
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::malformed_subject("Token subject is not a user id"))
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
