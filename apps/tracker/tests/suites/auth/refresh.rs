use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_problem_details, unique_email};
use serde_json::{json, Value};
use tracker::auth::jwt::verify_access_token;

use crate::support::app_builder::{build_app, call, test_security, test_state};
use crate::support::auth::{bearer, refresh_token_for, stale_refresh_token_for};
use crate::support::factory::signup_and_login;

#[actix_web::test]
async fn refresh_from_body_mints_access_token_for_same_user() {
    let app = build_app(test_state()).await;
    let account = signup_and_login(&app, &unique_email("refresh")).await;

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refreshtoken": account.refresh_token }))
        .to_request();
    let resp = call(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    let token = body["token"].as_str().unwrap();
    let claims = verify_access_token(token, std::time::SystemTime::now(), &test_security()).unwrap();
    assert_eq!(claims.user_id(), Some(account.id));

    // The new token opens protected endpoints.
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(bearer(token))
        .to_request();
    assert_eq!(call(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn refresh_from_cookie() {
    let app = build_app(test_state()).await;
    let token = refresh_token_for(4, &test_security());

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .cookie(Cookie::new("refreshToken", token))
        .to_request();
    let resp = call(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn refresh_inside_window_is_rejected() {
    let app = build_app(test_state()).await;
    let token = stale_refresh_token_for(4, &test_security());

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refreshtoken": token }))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_REFRESH_EXPIRED",
    )
    .await;
}

#[actix_web::test]
async fn access_token_cannot_be_used_to_refresh() {
    let app = build_app(test_state()).await;
    let account = signup_and_login(&app, &unique_email("kind")).await;

    let req = test::TestRequest::post()
        .uri("/auth/refresh")
        .set_json(json!({ "refreshtoken": account.token }))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_WRONG_TOKEN_KIND",
    )
    .await;
}

#[actix_web::test]
async fn missing_refresh_token_is_unauthorized() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::post().uri("/auth/refresh").to_request();
    assert_problem_details(call(&app, req).await, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
