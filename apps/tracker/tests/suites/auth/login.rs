use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_problem_details, unique_email};
use serde_json::{json, Value};
use tracker::auth::jwt::verify_access_token;
use tracker::auth::{verify_token, TokenKind};

use crate::support::app_builder::{build_app, call, test_security, test_state};
use crate::support::factory::{signup_and_login, PASSWORD};

#[actix_web::test]
async fn login_returns_access_and_refresh_tokens_for_the_user() {
    let app = build_app(test_state()).await;
    let account = signup_and_login(&app, &unique_email("login")).await;

    let sec = test_security();
    let now = std::time::SystemTime::now();
    let access = verify_access_token(&account.token, now, &sec).unwrap();
    assert_eq!(access.user_id(), Some(account.id));
    assert_eq!(access.iss, "AuthService");

    let refresh = verify_token(&account.refresh_token, TokenKind::Refresh, now, &sec).unwrap();
    assert_eq!(refresh.user_id(), Some(account.id));
    assert!(refresh.exp > access.exp);
}

#[actix_web::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let app = build_app(test_state()).await;
    let email = unique_email("wrongpw");
    signup_and_login(&app, &email).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": "not-the-password" }))
        .to_request();
    let wrong_pw = assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": unique_email("ghost"), "password": PASSWORD }))
        .to_request();
    let unknown = assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
    )
    .await;

    assert_eq!(wrong_pw.detail, unknown.detail);
}

#[actix_web::test]
async fn login_accepts_differently_cased_email() {
    let app = build_app(test_state()).await;
    let email = unique_email("mixed");
    signup_and_login(&app, &email).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email.to_uppercase(), "password": PASSWORD }))
        .to_request();
    let resp = call(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["token"].is_string());
    assert!(body["refreshtoken"].is_string());
}
