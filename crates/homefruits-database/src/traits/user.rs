//! User persistence.

use async_trait::async_trait;

use homefruits_core::result::AppResult;
use homefruits_core::types::UserId;
use homefruits_entity::user::User;

/// Persistence operations for registered users.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Insert a new user.
    ///
    /// Fails with `DuplicateEmail` if the email is already registered.
    async fn create_user(&self, email: &str, password_hash: &str) -> AppResult<User>;

    /// Look up the stored password hash and id for an email.
    ///
    /// Fails with `NotFound` if no user has this email.
    async fn get_user_password_and_id(&self, email: &str) -> AppResult<(String, UserId)>;

    /// Fetch a user by id.
    ///
    /// Fails with `NotFound` if the user does not exist.
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Resolve a user's email by id.
    ///
    /// Fails with `NotFound` if the user does not exist.
    async fn get_user_email(&self, id: UserId) -> AppResult<String>;
}
