//! Claims carried inside every token this service issues.

use serde::{Deserialize, Serialize};

/// Discriminates access tokens from refresh tokens so one can never stand
/// in for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Stable numeric user id, decimal encoded
    pub sub: String,
    pub iss: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    pub typ: TokenKind,
}

impl Claims {
    /// The subject as a user id, if it is one.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok().filter(|id| *id > 0)
    }
}
