//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use homefruits_core::error::AppError;
use homefruits_core::result::AppResult;
use homefruits_core::types::UserId;
use homefruits_entity::user::User;

use crate::traits::UserStore;

/// [`UserStore`] kept in process memory, keyed by email.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut users = self.users.lock().await;
        if users.contains_key(email) {
            return Err(AppError::duplicate_email("Email is already registered"));
        }

        let user = User {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn get_user_password_and_id(&self, email: &str) -> AppResult<(String, UserId)> {
        self.users
            .lock()
            .await
            .get(email)
            .map(|u| (u.password_hash.clone(), u.id))
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.users
            .lock()
            .await
            .values()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    async fn get_user_email(&self, id: UserId) -> AppResult<String> {
        self.users
            .lock()
            .await
            .values()
            .find(|u| u.id == id)
            .map(|u| u.email.clone())
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }
}
