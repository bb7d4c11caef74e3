//! Credential store contract.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::auth::password::HashedPassword;
use crate::errors::domain::DomainError;

pub const DEFAULT_ROLE: &str = "user";

/// A registered account. The password digest and salt stay server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    /// Unique, lower-cased login handle
    pub email: String,
    pub password: HashedPassword,
    pub full_name: String,
    pub role: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: HashedPassword,
    pub full_name: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<HashedPassword>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.password.is_none()
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `Conflict(UniqueEmail)` when the email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError>;

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Fails with `NotFound(User)` for unknown ids and `Conflict(UniqueEmail)`
    /// when moving to an email owned by another account.
    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, DomainError>;

    async fn delete_user(&self, id: i64) -> Result<(), DomainError>;
}
