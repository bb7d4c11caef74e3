//! Error types shared across stores, services and handlers.

pub mod domain;
pub mod error_code;

pub use domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
pub use error_code::ErrorCode;
