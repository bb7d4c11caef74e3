//! Request-level fixtures: accounts and learning records created through
//! the public API.

use actix_http::Request;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use serde_json::{json, Value};

use super::app_builder::call;
use super::auth::bearer;

pub const PASSWORD: &str = "secret123";

pub struct Account {
    pub id: i64,
    pub email: String,
    pub token: String,
    pub refresh_token: String,
}

pub async fn signup_and_login<S>(app: &S, email: &str) -> Account
where
    S: Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({ "email": email, "password": PASSWORD, "fullName": "Test Learner" }))
        .to_request();
    let resp = call(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": PASSWORD }))
        .to_request();
    let resp = call(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let pair: Value = test::read_body_json(resp).await;

    Account {
        id: created["id"].as_i64().expect("id"),
        email: created["email"].as_str().expect("email").to_string(),
        token: pair["token"].as_str().expect("token").to_string(),
        refresh_token: pair["refreshtoken"]
            .as_str()
            .expect("refreshtoken")
            .to_string(),
    }
}

pub async fn create_goal<S>(app: &S, token: &str, title: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/goals")
        .insert_header(bearer(token))
        .set_json(json!({
            "title": title,
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-06-30T00:00:00Z",
        }))
        .to_request();
    let resp = call(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

pub async fn create_entry<S>(app: &S, token: &str, goal_id: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/entries")
        .insert_header(bearer(token))
        .set_json(json!({ "goalId": goal_id, "title": "Read chapter 4", "description": "ownership" }))
        .to_request();
    let resp = call(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

pub async fn create_file<S>(app: &S, token: &str, entry_id: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/files")
        .insert_header(bearer(token))
        .set_json(json!({
            "entryId": entry_id,
            "fileName": "notes.md",
            "fileSize": 2048,
            "fileType": "text/markdown",
        }))
        .to_request();
    let resp = call(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}
