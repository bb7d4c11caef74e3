//! Token helpers for tests.

use std::time::{Duration, SystemTime};

use tracker::auth::jwt::{mint_access_token, mint_refresh_token};
use tracker::state::security_config::SecurityConfig;

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

pub fn access_token_for(user_id: i64, sec: &SecurityConfig) -> String {
    mint_access_token(user_id, SystemTime::now(), sec).expect("should mint access token")
}

pub fn refresh_token_for(user_id: i64, sec: &SecurityConfig) -> String {
    mint_refresh_token(user_id, SystemTime::now(), sec).expect("should mint refresh token")
}

/// Access token issued long enough ago that it has already expired.
pub fn expired_access_token_for(user_id: i64, sec: &SecurityConfig) -> String {
    let past = SystemTime::now()
        .checked_sub(sec.access_ttl + Duration::from_secs(60))
        .expect("clock should allow subtraction");
    mint_access_token(user_id, past, sec).expect("should mint expired token")
}

/// Refresh token with less than the renewal window left.
pub fn stale_refresh_token_for(user_id: i64, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now()
        .checked_sub(sec.refresh_ttl - sec.refresh_window / 2)
        .expect("clock should allow subtraction");
    mint_refresh_token(user_id, issued, sec).expect("should mint stale refresh token")
}
