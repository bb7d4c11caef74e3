pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::{Claims, TokenKind};
pub use jwt::{
    mint_access_token, mint_refresh_token, mint_token_pair, refresh_access_token,
    verify_access_token, verify_token, TokenError, TokenPair,
};
pub use password::{hash_password, verify_password, HashedPassword, PasswordError};
