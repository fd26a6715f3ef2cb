//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use homefruits_core::error::{AppError, ErrorKind};

/// Message returned for every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized user";

/// Message returned for every internal failure.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler error wrapper so `AppError` can be rendered by axum.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Status code and error code for an error kind.
pub fn classify(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::MissingCredentials
        | ErrorKind::InvalidToken
        | ErrorKind::MalformedSubject
        | ErrorKind::InvalidCredentials
        | ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Decode => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        ErrorKind::InsufficientStock => (StatusCode::BAD_REQUEST, "INSUFFICIENT_STOCK"),
        ErrorKind::DuplicateEmail => (StatusCode::CONFLICT, "DUPLICATE_EMAIL"),
        ErrorKind::Hashing
        | ErrorKind::Signing
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, code) = classify(err.kind);

        let message = if err.kind.is_internal() {
            match &err.source {
                Some(source) => {
                    error!(kind = %err.kind, error = %err.message, source = %source, "Request failed")
                }
                None => error!(kind = %err.kind, error = %err.message, "Request failed"),
            }
            INTERNAL_MESSAGE.to_string()
        } else if err.kind.is_authentication_failure() {
            debug!(kind = %err.kind, reason = %err.message, "Request not authenticated");
            UNAUTHORIZED_MESSAGE.to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
