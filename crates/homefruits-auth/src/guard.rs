//! Request authorization.

use std::sync::Arc;

use http::HeaderMap;
use tracing::warn;

use homefruits_core::error::{AppError, ErrorKind};
use homefruits_core::types::UserId;
use homefruits_database::UserStore;

use crate::jwt::{TokenSigner, bearer_token};

/// Turns request headers into a verified identity.
#[derive(Clone)]
pub struct AccessGuard {
    signer: Arc<TokenSigner>,
    users: Arc<dyn UserStore>,
    admin_email: String,
}

impl std::fmt::Debug for AccessGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGuard")
            .field("admin_email", &self.admin_email)
            .finish()
    }
}

impl AccessGuard {
    /// Creates a guard that treats `admin_email` as the administrator.
    pub fn new(
        signer: Arc<TokenSigner>,
        users: Arc<dyn UserStore>,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            signer,
            users,
            admin_email: admin_email.into(),
        }
    }

    /// Resolves the bearer token to a user id.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<UserId, AppError> {
        let token = bearer_token(headers)?;
        self.signer.verify(&token)
    }

    /// Resolves the bearer token and requires the administrator identity.
    ///
    /// The email comparison is exact. A user that no longer exists is
    /// forbidden, not unauthorized.
    pub async fn authorize_admin(&self, headers: &HeaderMap) -> Result<UserId, AppError> {
        let user_id = self.authorize(headers)?;

        let email = match self.users.get_user_email(user_id).await {
            Ok(email) => email,
            Err(e) if e.kind == ErrorKind::NotFound => {
                warn!(user_id = %user_id, "Admin check for unknown user");
                return Err(AppError::forbidden("Admin access required"));
            }
            Err(e) => return Err(e),
        };

        if email != self.admin_email {
            warn!(user_id = %user_id, "Non-admin user on admin route");
            return Err(AppError::forbidden("Admin access required"));
        }

        Ok(user_id)
    }
}
