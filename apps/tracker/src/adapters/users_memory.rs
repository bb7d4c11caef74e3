//! In-process user store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::users::{NewUser, User, UserChanges, UserStore, DEFAULT_ROLE};

#[derive(Debug, Default)]
struct Users {
    last_id: i64,
    by_id: BTreeMap<i64, User>,
}

impl Users {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.by_id
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// `UserStore` backed by a map behind a `parking_lot::RwLock`.
///
/// Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Users>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_conflict(email: &str) -> DomainError {
    DomainError::conflict(
        ConflictKind::UniqueEmail,
        format!("email '{email}' is already registered"),
    )
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.inner.write();
        if users.email_taken(&new_user.email, None) {
            return Err(email_conflict(&new_user.email));
        }

        users.last_id += 1;
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: users.last_id,
            email: new_user.email,
            password: new_user.password,
            full_name: new_user.full_name,
            role: DEFAULT_ROLE.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.inner.read().by_id.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .inner
            .read()
            .by_id
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, DomainError> {
        let mut users = self.inner.write();
        if let Some(email) = changes.email.as_deref() {
            if users.email_taken(email, Some(id)) {
                return Err(email_conflict(email));
            }
        }

        let user = users
            .by_id
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("user {id}")))?;

        if changes.is_empty() {
            return Ok(user.clone());
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(full_name) = changes.full_name {
            user.full_name = full_name;
        }
        if let Some(password) = changes.password {
            user.password = password;
        }
        user.updated_at = OffsetDateTime::now_utc();
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        self.inner
            .write()
            .by_id
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("user {id}")))
    }
}
