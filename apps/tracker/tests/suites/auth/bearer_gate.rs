use actix_web::http::{header, StatusCode};
use actix_web::test;
use backend_test_support::assert_problem_details;
use tracker::state::security_config::SecurityConfig;

use crate::support::app_builder::{build_app, call, test_security, test_state};
use crate::support::auth::{access_token_for, bearer, expired_access_token_for, refresh_token_for};

#[actix_web::test]
async fn missing_header_is_401_with_matching_trace_ids() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::get().uri("/goals").to_request();
    let resp = call(&app, req).await;

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id should be set");
    assert_eq!(
        resp.headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let problem =
        assert_problem_details(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED_MISSING_BEARER")
            .await;
    assert_eq!(problem.trace_id, request_id);
}

#[actix_web::test]
async fn malformed_headers_are_rejected() {
    let app = build_app(test_state()).await;
    for value in ["Bearer", "Bearer ", "Basic abc", "bearer abc", "Token abc"] {
        let req = test::TestRequest::get()
            .uri("/profile")
            .insert_header(("Authorization", value))
            .to_request();
        assert_problem_details(
            call(&app, req).await,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED_MISSING_BEARER",
        )
        .await;
    }
}

#[actix_web::test]
async fn garbage_token_is_malformed_jwt() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(bearer("not.a.jwt"))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MALFORMED_JWT",
    )
    .await;
}

#[actix_web::test]
async fn foreign_secret_is_invalid_signature() {
    let app = build_app(test_state()).await;
    let other = SecurityConfig::new("some-other-secret".as_bytes());
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(bearer(&access_token_for(1, &other)))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_SIGNATURE",
    )
    .await;
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::get()
        .uri("/goals")
        .insert_header(bearer(&expired_access_token_for(1, &test_security())))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_EXPIRED_JWT",
    )
    .await;
}

#[actix_web::test]
async fn refresh_token_is_not_an_access_token() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::get()
        .uri("/goals")
        .insert_header(bearer(&refresh_token_for(1, &test_security())))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_WRONG_TOKEN_KIND",
    )
    .await;
}

#[actix_web::test]
async fn public_routes_need_no_token() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = call(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("x-request-id").is_some());
}
