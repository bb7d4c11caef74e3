use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_problem_details, unique_email};
use serde_json::{json, Value};

use crate::support::app_builder::{build_app, call, test_state};
use crate::support::auth::bearer;
use crate::support::factory::{create_goal, signup_and_login, PASSWORD};

#[actix_web::test]
async fn profile_hides_credentials() {
    let app = build_app(test_state()).await;
    let me = signup_and_login(&app, &unique_email("profile")).await;

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(bearer(&me.token))
        .to_request();
    let body: Value = test::read_body_json(call(&app, req).await).await;
    assert_eq!(body["id"].as_i64(), Some(me.id));
    assert_eq!(body["email"], me.email.as_str());
    assert_eq!(body["fullName"], "Test Learner");
    assert_eq!(body["role"], "user");
    assert!(body.get("password").is_none());
    assert!(body.get("salt").is_none());
}

#[actix_web::test]
async fn password_change_takes_effect_on_next_login() {
    let app = build_app(test_state()).await;
    let me = signup_and_login(&app, &unique_email("pwchange")).await;

    let req = test::TestRequest::put()
        .uri("/profile")
        .insert_header(bearer(&me.token))
        .set_json(json!({ "password": "brand-new-pass", "fullName": "Renamed" }))
        .to_request();
    let body: Value = test::read_body_json(call(&app, req).await).await;
    assert_eq!(body["fullName"], "Renamed");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": me.email, "password": PASSWORD }))
        .to_request();
    assert_problem_details(
        call(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": me.email, "password": "brand-new-pass" }))
        .to_request();
    assert_eq!(call(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn email_change_cannot_collide() {
    let app = build_app(test_state()).await;
    let a = signup_and_login(&app, &unique_email("first")).await;
    let b = signup_and_login(&app, &unique_email("second")).await;

    let req = test::TestRequest::put()
        .uri("/profile")
        .insert_header(bearer(&b.token))
        .set_json(json!({ "email": a.email }))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::CONFLICT, "UNIQUE_EMAIL").await;
}

#[actix_web::test]
async fn deleting_account_removes_everything() {
    let app = build_app(test_state()).await;
    let me = signup_and_login(&app, &unique_email("bye")).await;
    let goal = create_goal(&app, &me.token, "g").await;

    let req = test::TestRequest::delete()
        .uri("/profile")
        .insert_header(bearer(&me.token))
        .to_request();
    assert_eq!(call(&app, req).await.status(), StatusCode::NO_CONTENT);

    // The still-valid token now points at nothing.
    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(bearer(&me.token))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::NOT_FOUND, "USER_NOT_FOUND").await;

    let req = test::TestRequest::get()
        .uri(&format!("/goals/{}", goal["id"]))
        .insert_header(bearer(&me.token))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::NOT_FOUND, "GOAL_NOT_FOUND").await;
}
