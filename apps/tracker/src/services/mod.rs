//! Business operations. Every learning-record operation takes the
//! authenticated user id and checks ownership before touching the store.

pub mod entries;
pub mod files;
pub mod goals;
pub mod ownership;
pub mod users;
