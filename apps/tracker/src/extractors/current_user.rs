use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::error::AppError;

/// Authenticated subject, placed in request extensions by `JwtExtract`.
///
/// Handlers take this as an argument; every ownership decision is made
/// against `id` and never against ids found in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Absent only when a route was mounted outside the protected scope.
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .copied()
                .ok_or_else(AppError::unauthorized),
        )
    }
}
