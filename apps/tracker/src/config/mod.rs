//! Startup configuration read from the process environment.
//!
//! All loaders take a lookup function instead of reading `std::env`
//! directly so tests can feed fixed values.

pub mod env;
pub mod server;
pub mod uploads;

pub use server::ServerConfig;
pub use uploads::UploadConfig;
