use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entries::EntryResponse;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::repos::learning::Goal;
use crate::services::goals::{self, GoalInput};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            user_id: goal.user_id,
            title: goal.title,
            start_date: goal.start_date,
            end_date: goal.end_date,
        }
    }
}

/// Body for both create and update. Any `userId` sent by the client is
/// ignored; ownership comes from the token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
}

impl From<GoalRequest> for GoalInput {
    fn from(req: GoalRequest) -> Self {
        Self {
            title: req.title,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

async fn create_goal(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GoalRequest>,
) -> Result<HttpResponse, AppError> {
    let goal = goals::create_goal(&app_state, current_user.id, body.into_inner().into()).await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(GoalResponse::from(goal)))
}

async fn list_goals(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let goals = goals::list_goals(&app_state, current_user.id).await?;
    Ok(HttpResponse::Ok().json(goals.into_iter().map(GoalResponse::from).collect::<Vec<_>>()))
}

async fn get_goal(
    current_user: CurrentUser,
    goal_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let goal = goals::get_goal(&app_state, current_user.id, goal_id.get()).await?;
    Ok(HttpResponse::Ok().json(GoalResponse::from(goal)))
}

async fn update_goal(
    current_user: CurrentUser,
    goal_id: ResourceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GoalRequest>,
) -> Result<HttpResponse, AppError> {
    let goal = goals::update_goal(
        &app_state,
        current_user.id,
        goal_id.get(),
        body.into_inner().into(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(GoalResponse::from(goal)))
}

async fn delete_goal(
    current_user: CurrentUser,
    goal_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    goals::delete_goal(&app_state, current_user.id, goal_id.get()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_goal_entries(
    current_user: CurrentUser,
    goal_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entries = goals::list_goal_entries(&app_state, current_user.id, goal_id.get()).await?;
    Ok(HttpResponse::Ok().json(entries.into_iter().map(EntryResponse::from).collect::<Vec<_>>()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_goals))
            .route(web::post().to(create_goal)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_goal))
            .route(web::put().to(update_goal))
            .route(web::delete().to(delete_goal)),
    )
    .route("/{id}/entries", web::get().to(list_goal_entries));
}
