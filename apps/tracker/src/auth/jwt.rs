//! Token service: mints and verifies HS256 access and refresh tokens.
//!
//! Every function takes `now` explicitly so expiry behaviour is testable
//! without sleeping. Verification order is fixed: signature, then claim
//! shape and issuer, then expiry, then token kind.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use thiserror::Error;

use super::claims::{Claims, TokenKind};
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token issuer is not trusted")]
    InvalidIssuer,
    #[error("token has expired")]
    Expired,
    #[error("expected {expected:?} token, got {actual:?}")]
    WrongKind {
        expected: TokenKind,
        actual: TokenKind,
    },
    #[error("refresh token is inside the renewal window")]
    RefreshExpired,
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("system clock is before the unix epoch")]
    Clock,
}

/// Login response body.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub token: String,
    pub refreshtoken: String,
}

fn unix_secs(now: SystemTime) -> Result<i64, TokenError> {
    now.duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| i64::try_from(d.as_secs()).ok())
        .ok_or(TokenError::Clock)
}

fn mint(
    user_id: i64,
    kind: TokenKind,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let iat = unix_secs(now)?;
    let ttl = match kind {
        TokenKind::Access => security.access_ttl,
        TokenKind::Refresh => security.refresh_ttl,
    };
    let exp = i64::try_from(ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| TokenError::Signing(format!("{kind:?} lifetime {ttl:?} is out of range")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        iss: security.issuer.clone(),
        iat,
        exp,
        typ: kind,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Short-lived token accepted by protected endpoints.
pub fn mint_access_token(
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    mint(user_id, TokenKind::Access, now, security)
}

/// Long-lived token accepted only by the refresh endpoint.
pub fn mint_refresh_token(
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    mint(user_id, TokenKind::Refresh, now, security)
}

pub fn mint_token_pair(
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<TokenPair, TokenError> {
    Ok(TokenPair {
        token: mint_access_token(user_id, now, security)?,
        refreshtoken: mint_refresh_token(user_id, now, security)?,
    })
}

/// Verify a token and return its claims.
///
/// Errors:
/// - bad signature → `InvalidSignature` (checked before anything in the payload is trusted)
/// - undecodable header/payload, missing claims, non-numeric subject → `Malformed`
/// - foreign issuer → `InvalidIssuer`
/// - `exp <= now` → `Expired`
/// - kind differs from `expected` → `WrongKind`
pub fn verify_token(
    token: &str,
    expected: TokenKind,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, TokenError> {
    // Expiry is checked below against the caller's clock with no leeway.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub", "iss"]);
    validation.set_issuer(&[security.issuer.as_str()]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
        _ => TokenError::Malformed,
    })?;

    if claims.user_id().is_none() {
        return Err(TokenError::Malformed);
    }

    if claims.exp <= unix_secs(now)? {
        return Err(TokenError::Expired);
    }

    if claims.typ != expected {
        return Err(TokenError::WrongKind {
            expected,
            actual: claims.typ,
        });
    }

    Ok(claims)
}

pub fn verify_access_token(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, TokenError> {
    verify_token(token, TokenKind::Access, now, security)
}

/// Exchange a refresh token for a new access token for the same subject.
///
/// The refresh token must have strictly more than `refresh_window` left;
/// otherwise the caller has to log in again.
pub fn refresh_access_token(
    refresh_token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let claims = verify_token(refresh_token, TokenKind::Refresh, now, security)?;

    let remaining = claims.exp.saturating_sub(unix_secs(now)?);
    let window = i64::try_from(security.refresh_window.as_secs()).unwrap_or(i64::MAX);
    if remaining <= window {
        return Err(TokenError::RefreshExpired);
    }

    let user_id = claims.user_id().ok_or(TokenError::Malformed)?;
    mint_access_token(user_id, now, security)
}
