use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::config::env::{parse_or, required, EnvLookup};
use crate::error::AppError;

pub const JWT_SECRET_VAR: &str = "TRACKER_JWT_SECRET";
pub const ACCESS_TTL_VAR: &str = "TRACKER_ACCESS_TTL_MINUTES";
pub const REFRESH_TTL_VAR: &str = "TRACKER_REFRESH_TTL_HOURS";
pub const REFRESH_WINDOW_VAR: &str = "TRACKER_REFRESH_WINDOW_MINUTES";

/// Issuer written into and required on every token.
pub const TOKEN_ISSUER: &str = "AuthService";

const DEFAULT_ACCESS_TTL_MINUTES: u64 = 30;
const DEFAULT_REFRESH_TTL_HOURS: u64 = 12;
const DEFAULT_REFRESH_WINDOW_MINUTES: u64 = 30;

/// Upper bound for any configured lifetime (100 years). Keeps `iat + ttl`
/// far inside `i64` for every realistic clock.
pub const MAX_TTL_SECS: u64 = 100 * 365 * 24 * 3600;

fn to_secs(var: &str, value: u64, unit_secs: u64) -> Result<u64, AppError> {
    value
        .checked_mul(unit_secs)
        .filter(|secs| *secs <= MAX_TTL_SECS)
        .ok_or_else(|| AppError::config(format!("{var} exceeds {MAX_TTL_SECS} seconds")))
}

/// Token signing material and lifetimes. Immutable after startup.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Symmetric HMAC secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Pinned signing algorithm (HS256)
    pub algorithm: Algorithm,
    pub issuer: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
    /// A refresh token must have more than this left to mint an access token
    pub refresh_window: Duration,
}

impl SecurityConfig {
    /// Config with the given secret and default lifetimes.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            issuer: TOKEN_ISSUER.to_string(),
            access_ttl: Duration::from_secs(DEFAULT_ACCESS_TTL_MINUTES * 60),
            refresh_ttl: Duration::from_secs(DEFAULT_REFRESH_TTL_HOURS * 3600),
            refresh_window: Duration::from_secs(DEFAULT_REFRESH_WINDOW_MINUTES * 60),
        }
    }

    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }

    pub fn with_refresh_window(mut self, window: Duration) -> Self {
        self.refresh_window = window;
        self
    }

    /// Load from the environment. A missing secret is fatal.
    pub fn from_env(env: &impl EnvLookup) -> Result<Self, AppError> {
        let secret = required(env, JWT_SECRET_VAR)?;
        let access_minutes: u64 = parse_or(env, ACCESS_TTL_VAR, DEFAULT_ACCESS_TTL_MINUTES)?;
        let refresh_hours: u64 = parse_or(env, REFRESH_TTL_VAR, DEFAULT_REFRESH_TTL_HOURS)?;
        let window_minutes: u64 =
            parse_or(env, REFRESH_WINDOW_VAR, DEFAULT_REFRESH_WINDOW_MINUTES)?;

        if access_minutes == 0 {
            return Err(AppError::config(format!("{ACCESS_TTL_VAR} must be positive")));
        }
        let access_secs = to_secs(ACCESS_TTL_VAR, access_minutes, 60)?;
        let refresh_secs = to_secs(REFRESH_TTL_VAR, refresh_hours, 3600)?;
        let window_secs = to_secs(REFRESH_WINDOW_VAR, window_minutes, 60)?;

        if refresh_secs <= window_secs {
            return Err(AppError::config(format!(
                "{REFRESH_TTL_VAR} must exceed {REFRESH_WINDOW_VAR}"
            )));
        }

        Ok(Self::new(secret.into_bytes())
            .with_access_ttl(Duration::from_secs(access_secs))
            .with_refresh_ttl(Duration::from_secs(refresh_secs))
            .with_refresh_window(Duration::from_secs(window_secs)))
    }
}

// The secret must never reach a log line.
impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .field("refresh_window", &self.refresh_window)
            .finish()
    }
}
