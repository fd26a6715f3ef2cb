//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted access token lifetime (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;

/// Longest accepted refresh token lifetime (one year).
pub const MAX_REFRESH_TTL_DAYS: u64 = 365;

/// Authentication and credential configuration.
///
/// The signing secret and admin email are supplied externally and are never
/// generated by the application.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Email of the single administrator identity (case-sensitive).
    pub admin_email: String,
    /// Issuer claim placed in every access token.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl AuthConfig {
    /// Build a configuration with default TTLs.
    pub fn new(jwt_secret: impl Into<String>, admin_email: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            admin_email: admin_email.into(),
            issuer: default_issuer(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
        }
    }

    /// Access token lifetime, clamped to [`MAX_ACCESS_TTL_MINUTES`].
    pub fn access_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_ttl_minutes.min(MAX_ACCESS_TTL_MINUTES) as i64)
    }

    /// Refresh token lifetime, clamped to [`MAX_REFRESH_TTL_DAYS`].
    pub fn refresh_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.refresh_ttl_days.min(MAX_REFRESH_TTL_DAYS) as i64)
    }

    /// Reject configurations that cannot authenticate anyone safely.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if self.admin_email.trim().is_empty() {
            return Err(AppError::configuration("auth.admin_email must not be empty"));
        }
        if self.access_ttl_minutes == 0 || self.refresh_ttl_days == 0 {
            return Err(AppError::configuration("token TTLs must be positive"));
        }
        if self.access_ttl_minutes > MAX_ACCESS_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "auth.access_ttl_minutes must be at most {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        if self.refresh_ttl_days > MAX_REFRESH_TTL_DAYS {
            return Err(AppError::configuration(format!(
                "auth.refresh_ttl_days must be at most {MAX_REFRESH_TTL_DAYS}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("admin_email", &self.admin_email)
            .field("issuer", &self.issuer)
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

fn default_issuer() -> String {
    "HomeFruits".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    15
}
