//! HS256 access token issuance and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use homefruits_core::config::AuthConfig;
use homefruits_core::error::AppError;
use homefruits_core::types::UserId;

use super::claims::Claims;

/// A signed access token with its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Compact JWT.
    pub token: String,
    /// Expiration time.
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies access tokens with a shared HMAC secret.
///
/// Only HS256 is accepted and expiry is checked without leeway: a token is
/// valid up to and including its `exp` second.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    has_secret: bool,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("issuer", &self.issuer)
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenSigner {
    /// Creates a signer bound to `secret` that stamps and requires `issuer`.
    pub fn new(secret: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer: issuer.to_string(),
            has_secret: !secret.is_empty(),
        }
    }

    /// Creates a signer from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, &config.issuer)
    }

    /// Issues a token for `user_id` that expires `ttl` from now.
    pub fn issue(&self, user_id: UserId, ttl: Duration) -> Result<AccessToken, AppError> {
        if !self.has_secret {
            return Err(AppError::signing("Signing secret is empty"));
        }

        let now = Utc::now();
        let expires_at = now + ttl;
        let claims = Claims {
            iss: self.issuer.clone(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::signing(format!("Failed to encode access token: {e}")))?;

        Ok(AccessToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies a token and returns the user it was issued to.
    pub fn verify(&self, token: &str) -> Result<UserId, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::invalid_token("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::invalid_token("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                    AppError::invalid_token("Unexpected token algorithm")
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::invalid_token("Unexpected token issuer")
                }
                _ => AppError::invalid_token(format!("Token validation failed: {e}")),
            }
        })?;

        data.claims.user_id()
    }
}
