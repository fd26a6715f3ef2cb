//! `Authorization: Bearer` header extraction.

use http::HeaderMap;
use http::header::AUTHORIZATION;

use homefruits_core::error::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the bearer token from request headers.
///
/// Exactly one leading `"Bearer "` is removed; anything after it, including
/// a second `"Bearer "`, is the token. A missing, empty or non-bearer header
/// and an empty token all fail with `MissingCredentials`.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::missing_credentials("Missing authorization header"))?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AppError::missing_credentials(
            "Authorization header is not a bearer token",
        )),
    }
}
