//! ULID-based unique values so concurrently running tests never share a
//! handle in a store.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique, lower-case email under the reserved `example.test` domain.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("learner");
/// let b = unique_email("learner");
/// assert_ne!(a, b);
/// assert!(a.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}
