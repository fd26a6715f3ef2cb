//! Unified application error types for HomeFruits.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The [`ErrorKind`] decides the
//! externally visible outcome; the message and source are for operators.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A request body or parameter could not be decoded.
    Decode,
    /// Password hashing failed.
    Hashing,
    /// An access token could not be signed.
    Signing,
    /// An access token is malformed, forged, or expired.
    InvalidToken,
    /// The token subject is not a parseable user identity.
    MalformedSubject,
    /// No bearer credentials were supplied.
    MissingCredentials,
    /// A refresh token is unknown, expired, or revoked.
    Unauthorized,
    /// The requested resource was not found.
    NotFound,
    /// A user with the same email already exists.
    DuplicateEmail,
    /// Email and password do not match a known user.
    InvalidCredentials,
    /// Not enough available stock for the requested reservation.
    InsufficientStock,
    /// The caller is authenticated but lacks admin privileges.
    Forbidden,
    /// The backing store failed.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// An unexpected internal error occurred.
    Internal,
}

impl ErrorKind {
    /// Returns `true` for kinds that surface as a single "unauthorized"
    /// outcome to callers.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken
                | Self::MalformedSubject
                | Self::MissingCredentials
                | Self::Unauthorized
                | Self::InvalidCredentials
        )
    }

    /// Returns `true` for kinds whose details must never reach the caller.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Hashing | Self::Signing | Self::Storage | Self::Configuration | Self::Internal
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode => write!(f, "DECODE"),
            Self::Hashing => write!(f, "HASHING"),
            Self::Signing => write!(f, "SIGNING"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::MalformedSubject => write!(f, "MALFORMED_SUBJECT"),
            Self::MissingCredentials => write!(f, "MISSING_CREDENTIALS"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::DuplicateEmail => write!(f, "DUPLICATE_EMAIL"),
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::InsufficientStock => write!(f, "INSUFFICIENT_STOCK"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout HomeFruits.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Create a hashing error.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hashing, message)
    }

    /// Create a signing error.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Signing, message)
    }

    /// Create an invalid-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Create a malformed-subject error.
    pub fn malformed_subject(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedSubject, message)
    }

    /// Create a missing-credentials error.
    pub fn missing_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredentials, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a duplicate-email error.
    pub fn duplicate_email(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEmail, message)
    }

    /// Create an invalid-credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredentials, message)
    }

    /// Create an insufficient-stock error.
    pub fn insufficient_stock(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InsufficientStock, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Decode, format!("JSON decode error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("Database error: {err}"), err)
    }
}
