//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use homefruits_core::error::{AppError, ErrorKind};
use homefruits_core::result::AppResult;
use homefruits_core::types::UserId;
use homefruits_entity::user::User;

use crate::traits::UserStore;

/// PostgreSQL-backed [`UserStore`].
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, email: &str, password_hash: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::duplicate_email("Email is already registered")
            }
            _ => AppError::with_source(ErrorKind::Storage, "Failed to create user", e),
        })
    }

    async fn get_user_password_and_id(&self, email: &str) -> AppResult<(String, UserId)> {
        sqlx::query_as::<_, (String, UserId)>(
            "SELECT password_hash, id FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to find user by email", e))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to find user", e))?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn get_user_email(&self, id: UserId) -> AppResult<String> {
        sqlx::query_scalar::<_, String>("SELECT email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to find user email", e))?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }
}
