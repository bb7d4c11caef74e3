//! Account lifecycle and credential exchange.

use std::time::SystemTime;

use tracing::{debug, info};

use crate::auth::jwt::{mint_token_pair, refresh_access_token, TokenPair};
use crate::auth::password::{hash_password, verify_password, HashedPassword, DIGEST_LEN, SALT_LEN};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{NewUser, User, UserChanges};
use crate::state::app_state::AppState;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trimmed, lower-cased email; rejects values that cannot be an address.
pub fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::validation("Email is required"));
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace) =>
        {
            Ok(email)
        }
        _ => Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "Email address is not valid",
        )),
    }
}

fn check_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Derive a digest with a fresh salt on the blocking pool.
async fn hash_blocking(password: String) -> Result<HashedPassword, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password, None))
        .await
        .map_err(|e| AppError::internal(format!("hashing task failed: {e}")))?
        .map_err(AppError::from)
}

async fn verify_blocking(password: String, stored: HashedPassword) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored.salt, &stored.digest))
        .await
        .map_err(|e| AppError::internal(format!("verification task failed: {e}")))?
        .map_err(AppError::from)
}

/// Stand-in credential checked when the email is unknown so both failure
/// paths cost one Argon2 derivation. The all-zero digest never matches.
fn decoy_credential() -> HashedPassword {
    HashedPassword {
        digest: vec![0; DIGEST_LEN],
        salt: vec![0; SALT_LEN],
    }
}

/// Register a new account. Nothing is stored if hashing fails.
pub async fn signup(
    state: &AppState,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<User, AppError> {
    let email = normalize_email(email)?;
    check_password(password)?;

    let password = hash_blocking(password.to_string()).await?;
    let user = state
        .users
        .create_user(NewUser {
            email,
            password,
            full_name: full_name.trim().to_string(),
        })
        .await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
    Ok(user)
}

/// Exchange credentials for an access/refresh token pair.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<TokenPair, AppError> {
    let email = email.trim().to_lowercase();
    let Some(user) = state.users.find_user_by_email(&email).await? else {
        verify_blocking(password.to_string(), decoy_credential()).await?;
        debug!(email = %Redacted(&email), "login for unknown email");
        return Err(AppError::invalid_credentials());
    };

    if !verify_blocking(password.to_string(), user.password.clone()).await? {
        debug!(user_id = user.id, "login with wrong password");
        return Err(AppError::invalid_credentials());
    }

    let pair = mint_token_pair(user.id, SystemTime::now(), &state.security)?;
    info!(user_id = user.id, "login succeeded");
    Ok(pair)
}

/// Mint a new access token from a refresh token.
pub fn refresh(state: &AppState, refresh_token: &str) -> Result<String, AppError> {
    Ok(refresh_access_token(
        refresh_token,
        SystemTime::now(),
        &state.security,
    )?)
}

pub async fn profile(state: &AppState, user_id: i64) -> Result<User, AppError> {
    state
        .users
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, format!("User {user_id} not found")))
}

/// Requested profile changes; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

pub async fn update_profile(
    state: &AppState,
    user_id: i64,
    update: ProfileUpdate,
) -> Result<User, AppError> {
    let email = update.email.as_deref().map(normalize_email).transpose()?;
    let password = match update.password {
        Some(p) => {
            check_password(&p)?;
            Some(hash_blocking(p).await?)
        }
        None => None,
    };

    let user = state
        .users
        .update_user(
            user_id,
            UserChanges {
                email,
                full_name: update.full_name.map(|n| n.trim().to_string()),
                password,
            },
        )
        .await?;

    info!(user_id, "profile updated");
    Ok(user)
}

/// Remove the account and everything it owns.
pub async fn delete_account(state: &AppState, user_id: i64) -> Result<(), AppError> {
    profile(state, user_id).await?;
    state.learning.delete_all_for_user(user_id).await?;
    state.users.delete_user(user_id).await?;
    info!(user_id, "account deleted");
    Ok(())
}
