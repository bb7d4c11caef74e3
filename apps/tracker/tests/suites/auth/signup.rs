use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_problem_details, unique_email};
use serde_json::{json, Value};

use crate::support::app_builder::{build_app, call, test_state};

fn signup_req(email: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({ "email": email, "password": password, "fullName": "Ada" }))
        .to_request()
}

#[actix_web::test]
async fn signup_succeeds_once_then_conflicts() {
    let app = build_app(test_state()).await;

    let resp = call(&app, signup_req("a@example.com", "secret123")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "a@example.com");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body.get("password").is_none());
    assert!(body.get("salt").is_none());

    let resp = call(&app, signup_req("a@example.com", "secret123")).await;
    assert_problem_details(resp, StatusCode::CONFLICT, "UNIQUE_EMAIL").await;
}

#[actix_web::test]
async fn email_is_case_insensitive() {
    let app = build_app(test_state()).await;
    let email = unique_email("case");

    let resp = call(&app, signup_req(&email, "secret123")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = call(&app, signup_req(&format!("  {}", email.to_uppercase()), "secret123")).await;
    assert_problem_details(resp, StatusCode::CONFLICT, "UNIQUE_EMAIL").await;
}

#[actix_web::test]
async fn weak_password_and_bad_email_are_rejected() {
    let app = build_app(test_state()).await;

    let resp = call(&app, signup_req(&unique_email("weak"), "short")).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let resp = call(&app, signup_req("not-an-email", "secret123")).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "INVALID_EMAIL").await;
}

#[actix_web::test]
async fn malformed_body_is_bad_request() {
    let app = build_app(test_state()).await;
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = call(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}
