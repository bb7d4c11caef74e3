//! Shared helpers for the tracker integration tests.
//!
//! Kept out of the service crate so test binaries can depend on it without
//! pulling test-only code into the production build.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

pub use problem_details::{assert_problem_details, ProblemDetailsLike};
pub use unique_helpers::{unique_email, unique_str};
