//! Salted Argon2id password hashing.
//!
//! Parameters are fixed: time cost 1, 64 MiB memory, 4 lanes, 32-byte
//! output. Changing them invalidates every stored digest.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

pub const SALT_LEN: usize = 16;
pub const DIGEST_LEN: usize = 32;

const MEMORY_KIB: u32 = 64 * 1024;
const TIME_COST: u32 = 1;
const LANES: u32 = 4;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("secure random source failed: {0}")]
    Rng(String),
    #[error("invalid argon2 parameters: {0}")]
    Params(String),
    #[error("key derivation failed: {0}")]
    Derivation(String),
}

/// Digest and the salt it was derived with; stored together.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub digest: Vec<u8>,
    pub salt: Vec<u8>,
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashedPassword([REDACTED])")
    }
}

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_KIB, TIME_COST, LANES, Some(DIGEST_LEN))
        .map_err(|e| PasswordError::Params(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn derive(password: &str, salt: &[u8]) -> Result<[u8; DIGEST_LEN], PasswordError> {
    let mut out = [0u8; DIGEST_LEN];
    hasher()?
        .hash_password_into(password.as_bytes(), salt, &mut out)
        .map_err(|e| PasswordError::Derivation(e.to_string()))?;
    Ok(out)
}

/// Fresh random salt from the OS generator.
pub fn generate_salt() -> Result<[u8; SALT_LEN], PasswordError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PasswordError::Rng(e.to_string()))?;
    Ok(salt)
}

/// Hash `password` with `salt`, or with a freshly generated salt when `None`.
pub fn hash_password(password: &str, salt: Option<&[u8]>) -> Result<HashedPassword, PasswordError> {
    let salt = match salt {
        Some(s) => s.to_vec(),
        None => generate_salt()?.to_vec(),
    };
    let digest = derive(password, &salt)?.to_vec();
    Ok(HashedPassword { digest, salt })
}

/// Whether `password` derives to `digest` under `salt`.
pub fn verify_password(password: &str, salt: &[u8], digest: &[u8]) -> Result<bool, PasswordError> {
    let candidate = derive(password, salt)?;
    Ok(constant_time_eq(&candidate, digest))
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
