use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::{assert_problem_details, unique_email};
use serde_json::{json, Value};

use crate::support::app_builder::{build_app, call, test_state};
use crate::support::auth::bearer;
use crate::support::factory::{create_entry, create_goal, signup_and_login};

#[actix_web::test]
async fn new_entry_defaults_to_not_started_and_can_progress() {
    let app = build_app(test_state()).await;
    let me = signup_and_login(&app, &unique_email("entries")).await;
    let goal = create_goal(&app, &me.token, "Learn Rust").await;
    let goal_id = goal["id"].as_i64().unwrap();

    let entry = create_entry(&app, &me.token, goal_id).await;
    assert_eq!(entry["status"], "Not Started");
    assert_eq!(entry["goalId"].as_i64(), Some(goal_id));
    let entry_id = entry["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/entries/{entry_id}"))
        .insert_header(bearer(&me.token))
        .set_json(json!({ "title": "Read chapter 4", "description": "done", "status": "In Progress" }))
        .to_request();
    let updated: Value = test::read_body_json(call(&app, req).await).await;
    assert_eq!(updated["status"], "In Progress");

    let req = test::TestRequest::get()
        .uri(&format!("/goals/{goal_id}/entries"))
        .insert_header(bearer(&me.token))
        .to_request();
    let list: Value = test::read_body_json(call(&app, req).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn cannot_attach_entries_to_someone_elses_goal() {
    let app = build_app(test_state()).await;
    let owner = signup_and_login(&app, &unique_email("owner")).await;
    let intruder = signup_and_login(&app, &unique_email("intruder")).await;
    let goal = create_goal(&app, &owner.token, "private").await;

    let req = test::TestRequest::post()
        .uri("/entries")
        .insert_header(bearer(&intruder.token))
        .set_json(json!({ "goalId": goal["id"], "title": "sneaky" }))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::FORBIDDEN, "NOT_OWNER").await;

    // A blank title does not reveal anything before the owner check.
    let req = test::TestRequest::post()
        .uri("/entries")
        .insert_header(bearer(&intruder.token))
        .set_json(json!({ "goalId": goal["id"], "title": "  " }))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::FORBIDDEN, "NOT_OWNER").await;

    let req = test::TestRequest::get()
        .uri(&format!("/goals/{}/entries", goal["id"]))
        .insert_header(bearer(&intruder.token))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::FORBIDDEN, "NOT_OWNER").await;
}

#[actix_web::test]
async fn unknown_goal_and_status_are_rejected() {
    let app = build_app(test_state()).await;
    let me = signup_and_login(&app, &unique_email("unknown")).await;

    let req = test::TestRequest::post()
        .uri("/entries")
        .insert_header(bearer(&me.token))
        .set_json(json!({ "goalId": 404, "title": "nowhere" }))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::NOT_FOUND, "GOAL_NOT_FOUND").await;

    let goal = create_goal(&app, &me.token, "g").await;
    let entry = create_entry(&app, &me.token, goal["id"].as_i64().unwrap()).await;
    let req = test::TestRequest::put()
        .uri(&format!("/entries/{}", entry["id"]))
        .insert_header(bearer(&me.token))
        .set_json(json!({ "title": "t", "status": "Done" }))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

#[actix_web::test]
async fn deleting_goal_removes_its_entries() {
    let app = build_app(test_state()).await;
    let me = signup_and_login(&app, &unique_email("cascade")).await;
    let goal = create_goal(&app, &me.token, "short lived").await;
    let entry = create_entry(&app, &me.token, goal["id"].as_i64().unwrap()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/goals/{}", goal["id"]))
        .insert_header(bearer(&me.token))
        .to_request();
    assert_eq!(call(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/entries/{}", entry["id"]))
        .insert_header(bearer(&me.token))
        .to_request();
    assert_problem_details(call(&app, req).await, StatusCode::NOT_FOUND, "ENTRY_NOT_FOUND").await;
}
