use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::config::UploadConfig;
use crate::repos::{LearningStore, UserStore};

/// Shared, immutable-after-startup application state.
///
/// Stores are trait objects so tests and the binary can swap backends.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub learning: Arc<dyn LearningStore>,
    /// Token signing material and lifetimes
    pub security: SecurityConfig,
    pub uploads: UploadConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        learning: Arc<dyn LearningStore>,
        security: SecurityConfig,
        uploads: UploadConfig,
    ) -> Self {
        Self {
            users,
            learning,
            security,
            uploads,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("security", &self.security)
            .field("uploads", &self.uploads)
            .finish_non_exhaustive()
    }
}
