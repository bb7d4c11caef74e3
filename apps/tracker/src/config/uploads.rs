use super::env::{parse_or, EnvLookup};
use crate::error::AppError;

pub const UPLOAD_ROOT_VAR: &str = "TRACKER_UPLOAD_ROOT";
pub const MAX_UPLOAD_BYTES_VAR: &str = "TRACKER_MAX_UPLOAD_BYTES";

/// 25 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 25 << 20;

/// Where file records point and how large they may be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub root: String,
    pub max_bytes: u64,
}

impl UploadConfig {
    pub fn from_env(env: &impl EnvLookup) -> Result<Self, AppError> {
        let root: String = parse_or(env, UPLOAD_ROOT_VAR, "uploads".to_string())?;
        Ok(Self {
            root: root.trim_end_matches('/').to_string(),
            max_bytes: parse_or(env, MAX_UPLOAD_BYTES_VAR, DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: "uploads".to_string(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
