//! Bearer-token gate for protected scopes.
//!
//! Reads `Authorization: Bearer <token>`, verifies it as an access token and
//! stores the subject as [`CurrentUser`] in request extensions before the
//! inner service runs. Any failure short-circuits with a 401 Problem Details
//! response and the handler is never called.

use std::time::SystemTime;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::state::app_state::AppState;

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match bearer_token(req.headers().get(header::AUTHORIZATION)) {
            Some(token) => token,
            None => {
                debug!("missing or malformed Authorization header");
                return Box::pin(async { Err(AppError::unauthorized_missing_bearer().into()) });
            }
        };

        let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
            return Box::pin(async { Err(AppError::internal("AppState not configured").into()) });
        };

        match verify_access_token(&token, SystemTime::now(), &state.security) {
            Ok(claims) => {
                let Some(id) = claims.user_id() else {
                    return Box::pin(async { Err(AppError::unauthorized().into()) });
                };
                req.extensions_mut().insert(CurrentUser { id });
                Box::pin(self.service.call(req))
            }
            Err(e) => {
                debug!(reason = %e, "bearer token rejected");
                let err: AppError = e.into();
                Box::pin(async move { Err(err.into()) })
            }
        }
    }
}

/// Token after the literal `Bearer ` prefix; `None` when absent, empty or
/// not a single token.
fn bearer_token(value: Option<&HeaderValue>) -> Option<String> {
    let raw = value?.to_str().ok()?;
    let token = raw.strip_prefix("Bearer ")?;
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token.to_string())
}
