use super::env::{parse_or, EnvLookup};
use crate::error::AppError;

pub const HOST_VAR: &str = "TRACKER_HOST";
pub const PORT_VAR: &str = "TRACKER_PORT";

/// Listener address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env(env: &impl EnvLookup) -> Result<Self, AppError> {
        Ok(Self {
            host: parse_or(env, HOST_VAR, "0.0.0.0".to_string())?,
            port: parse_or(env, PORT_VAR, 8000u16)?,
        })
    }
}
