use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::files::FileResponse;
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::repos::learning::{Entry, EntryStatus};
use crate::services::entries;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i64,
    pub goal_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub status: EntryStatus,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            goal_id: entry.goal_id,
            user_id: entry.user_id,
            title: entry.title,
            description: entry.description,
            date: entry.date,
            status: entry.status,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub goal_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: EntryStatus,
}

async fn create_entry(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let entry = entries::create_entry(
        &app_state,
        current_user.id,
        body.goal_id,
        &body.title,
        &body.description,
    )
    .await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(EntryResponse::from(entry)))
}

async fn get_entry(
    current_user: CurrentUser,
    entry_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entry = entries::get_entry(&app_state, current_user.id, entry_id.get()).await?;
    Ok(HttpResponse::Ok().json(EntryResponse::from(entry)))
}

async fn update_entry(
    current_user: CurrentUser,
    entry_id: ResourceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let entry = entries::update_entry(
        &app_state,
        current_user.id,
        entry_id.get(),
        &body.title,
        &body.description,
        body.status,
    )
    .await?;
    Ok(HttpResponse::Ok().json(EntryResponse::from(entry)))
}

async fn delete_entry(
    current_user: CurrentUser,
    entry_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    entries::delete_entry(&app_state, current_user.id, entry_id.get()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn list_entry_files(
    current_user: CurrentUser,
    entry_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let files = entries::list_entry_files(&app_state, current_user.id, entry_id.get()).await?;
    Ok(HttpResponse::Ok().json(files.into_iter().map(FileResponse::from).collect::<Vec<_>>()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_entry))
        .service(
            web::resource("/{id}")
                .route(web::get().to(get_entry))
                .route(web::put().to(update_entry))
                .route(web::delete().to(delete_entry)),
        )
        .route("/{id}/files", web::get().to(list_entry_files));
}
