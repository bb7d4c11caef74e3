use std::fmt::Display;
use std::str::FromStr;

use crate::error::AppError;

/// Key lookup used by every config loader.
pub trait EnvLookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Reads the real process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse `key` if present and non-blank, otherwise return `default`.
pub fn parse_or<T>(env: &impl EnvLookup, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match env.get(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{key} is invalid: {e}"))),
        _ => Ok(default),
    }
}

/// A required, non-empty value.
pub fn required(env: &impl EnvLookup, key: &str) -> Result<String, AppError> {
    match env.get(key) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::config(format!("{key} must be set"))),
    }
}
