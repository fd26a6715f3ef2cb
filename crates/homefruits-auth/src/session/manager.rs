//! Session lifecycle manager: register, login, refresh and revoke.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use homefruits_core::config::AuthConfig;
use homefruits_core::error::{AppError, ErrorKind};
use homefruits_database::{TokenStore, UserStore};
use homefruits_entity::user::UserProfile;

use crate::jwt::{AccessToken, TokenSigner};
use crate::password::PasswordHasher;
use crate::refresh::RefreshTokenStore;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Argon2id digest with the hasher's default cost parameters. Verified
/// against on unknown-email logins so both rejection paths cost one verify.
const DUMMY_DIGEST: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Tokens handed out by a successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Opaque refresh token.
    pub refresh_token: String,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserProfile,
}

/// Orchestrates the password hasher, token signer and refresh token store.
#[derive(Clone)]
pub struct SessionManager {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    signer: Arc<TokenSigner>,
    refresh_tokens: RefreshTokenStore,
    access_ttl: Duration,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_tokens", &self.refresh_tokens)
            .finish()
    }
}

impl SessionManager {
    /// Creates a session manager.
    pub fn new(
        users: Arc<dyn UserStore>,
        signer: Arc<TokenSigner>,
        refresh_tokens: RefreshTokenStore,
        access_ttl: Duration,
    ) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            signer,
            refresh_tokens,
            access_ttl,
        }
    }

    /// Creates a session manager with TTLs taken from configuration.
    pub fn from_config(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        tokens: Arc<dyn TokenStore>,
        signer: Arc<TokenSigner>,
    ) -> Self {
        Self::new(
            users,
            signer,
            RefreshTokenStore::new(tokens, config.refresh_ttl()),
            config.access_ttl(),
        )
    }

    /// Creates an account and opens a session for it.
    ///
    /// Fails with `DuplicateEmail` if the email is taken.
    pub async fn register(&self, email: &str, password: &str) -> Result<SessionTokens, AppError> {
        let digest = self.hasher.hash(password)?;
        let user = self.users.create_user(email, &digest).await?;

        info!(user_id = %user.id, "User registered");
        self.open_session(UserProfile::from(&user)).await
    }

    /// Checks credentials and opens a session.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionTokens, AppError> {
        let (digest, user_id) = match self.users.get_user_password_and_id(email).await {
            Ok(found) => found,
            Err(e) if e.kind == ErrorKind::NotFound => {
                let _ = self.hasher.verify(password, DUMMY_DIGEST);
                warn!("Login attempt for unknown email");
                return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(password, &digest) {
            warn!(user_id = %user_id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials(INVALID_CREDENTIALS));
        }

        let user = self.users.get_user(user_id).await?;
        info!(user_id = %user_id, "Login successful");
        self.open_session(UserProfile::from(&user)).await
    }

    /// Mints a new access token from a refresh token.
    ///
    /// Unknown, expired and revoked tokens all fail with `Unauthorized`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AccessToken, AppError> {
        let record = self.refresh_tokens.validate_usable(refresh_token).await?;
        let access = self.signer.issue(record.user_id, self.access_ttl)?;

        info!(user_id = %record.user_id, "Access token refreshed");
        Ok(access)
    }

    /// Revokes a refresh token. Idempotent.
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AppError> {
        self.refresh_tokens.revoke(refresh_token).await
    }

    async fn open_session(&self, user: UserProfile) -> Result<SessionTokens, AppError> {
        let access = self.signer.issue(user.id, self.access_ttl)?;
        let refresh = self.refresh_tokens.issue(user.id).await?;

        Ok(SessionTokens {
            access_token: access.token,
            access_expires_at: access.expires_at,
            refresh_token: refresh.token,
            refresh_expires_at: refresh.expires_at,
            user,
        })
    }
}
