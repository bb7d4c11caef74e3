use std::sync::Arc;

use crate::adapters::{MemoryLearningStore, MemoryUserStore};
use crate::config::UploadConfig;
use crate::error::AppError;
use crate::repos::{LearningStore, UserStore};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for `AppState` (used in both tests and main).
///
/// Stores default to the in-memory adapters; security has no default
/// because there is no safe fallback secret.
#[derive(Default)]
pub struct StateBuilder {
    security_config: Option<SecurityConfig>,
    upload_config: Option<UploadConfig>,
    users: Option<Arc<dyn UserStore>>,
    learning: Option<Arc<dyn LearningStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    pub fn with_uploads(mut self, upload_config: UploadConfig) -> Self {
        self.upload_config = Some(upload_config);
        self
    }

    pub fn with_user_store(mut self, users: Arc<dyn UserStore>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_learning_store(mut self, learning: Arc<dyn LearningStore>) -> Self {
        self.learning = Some(learning);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security_config
            .ok_or_else(|| AppError::config("security config is required to build state"))?;
        if security.jwt_secret.is_empty() {
            return Err(AppError::config("JWT secret must not be empty"));
        }

        let users: Arc<dyn UserStore> = match self.users {
            Some(users) => users,
            None => Arc::new(MemoryUserStore::new()),
        };
        let learning: Arc<dyn LearningStore> = match self.learning {
            Some(learning) => learning,
            None => Arc::new(MemoryLearningStore::new()),
        };

        Ok(AppState::new(
            users,
            learning,
            security,
            self.upload_config.unwrap_or_default(),
        ))
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
