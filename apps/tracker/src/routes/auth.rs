use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::services::users;
use crate::state::app_state::AppState;

/// Cookie consulted by `/auth/refresh` when the body carries no token.
pub const REFRESH_COOKIE: &str = "refreshToken";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refreshtoken: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

async fn signup(
    app_state: web::Data<AppState>,
    body: ValidatedJson<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let user = users::signup(&app_state, &body.email, &body.password, &body.full_name).await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(SignupResponse {
        id: user.id,
        email: user.email,
    }))
}

async fn login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let pair = users::login(&app_state, &body.email, &body.password).await?;
    Ok(HttpResponse::Ok().json(pair))
}

/// Token from the JSON body if one is present, otherwise from the cookie.
fn refresh_token_from(req: &HttpRequest, body: &[u8]) -> Result<Option<String>, AppError> {
    if !body.iter().all(u8::is_ascii_whitespace) {
        let parsed: RefreshRequest = serde_json::from_slice(body).map_err(|_| {
            AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON in refresh request")
        })?;
        if let Some(token) = parsed.refreshtoken.filter(|t| !t.is_empty()) {
            return Ok(Some(token));
        }
    }
    Ok(req
        .cookie(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty()))
}

async fn refresh(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let token = refresh_token_from(&req, &body)?.ok_or_else(AppError::unauthorized)?;
    let token = users::refresh(&app_state, &token)?;
    Ok(HttpResponse::Ok().json(RefreshResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/signup", web::post().to(signup))
        .route("/login", web::post().to(login))
        .route("/refresh", web::post().to(refresh));
}
