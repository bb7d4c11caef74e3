//! Error codes for the tracker API.
//!
//! Every code that can appear in a Problem Details body is defined here.
//! Never pass ad-hoc strings as error codes.

use core::fmt;

/// Closed set of SCREAMING_SNAKE_CASE codes returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer header
    UnauthorizedMissingBearer,
    /// Token could not be decoded
    UnauthorizedMalformedJwt,
    /// Token signature does not match
    UnauthorizedInvalidSignature,
    /// Token was issued by someone else
    UnauthorizedInvalidIssuer,
    /// Token has expired
    UnauthorizedExpiredJwt,
    /// Access token used where a refresh token is required, or vice versa
    UnauthorizedWrongTokenKind,
    /// Refresh token is too close to expiry to renew
    UnauthorizedRefreshExpired,
    /// Unknown email or wrong password
    InvalidCredentials,

    // Authorization
    /// Token subject no longer exists
    ForbiddenUserNotFound,
    /// Resource belongs to another user
    NotOwner,

    // Request validation
    BadRequest,
    ValidationError,
    InvalidEmail,
    InvalidId,
    FileTooLarge,

    // Not found
    UserNotFound,
    GoalNotFound,
    EntryNotFound,
    FileNotFound,
    NotFound,

    // Conflicts
    UniqueEmail,

    // System
    Internal,
    ConfigError,
    StoreUnavailable,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedMalformedJwt => "UNAUTHORIZED_MALFORMED_JWT",
            Self::UnauthorizedInvalidSignature => "UNAUTHORIZED_INVALID_SIGNATURE",
            Self::UnauthorizedInvalidIssuer => "UNAUTHORIZED_INVALID_ISSUER",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::UnauthorizedWrongTokenKind => "UNAUTHORIZED_WRONG_TOKEN_KIND",
            Self::UnauthorizedRefreshExpired => "UNAUTHORIZED_REFRESH_EXPIRED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::NotOwner => "NOT_OWNER",

            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidId => "INVALID_ID",
            Self::FileTooLarge => "FILE_TOO_LARGE",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::GoalNotFound => "GOAL_NOT_FOUND",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
