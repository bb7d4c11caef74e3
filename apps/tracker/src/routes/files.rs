use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::repos::learning::FileRecord;
use crate::services::files::{self, FileInput};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub id: i64,
    pub entry_id: i64,
    pub user_id: i64,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    pub file_path: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<FileRecord> for FileResponse {
    fn from(file: FileRecord) -> Self {
        Self {
            id: file.id,
            entry_id: file.entry_id,
            user_id: file.user_id,
            file_name: file.file_name,
            file_size: file.file_size,
            file_type: file.file_type,
            file_path: file.file_path,
            created_at: file.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    pub entry_id: i64,
    pub file_name: String,
    pub file_size: u64,
    #[serde(default)]
    pub file_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFileRequest {
    pub file_name: String,
    pub file_size: u64,
    #[serde(default)]
    pub file_type: String,
}

async fn create_file(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateFileRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let file = files::create_file(
        &app_state,
        current_user.id,
        body.entry_id,
        FileInput {
            file_name: body.file_name,
            file_size: body.file_size,
            file_type: body.file_type,
        },
    )
    .await?;
    Ok(HttpResponse::build(StatusCode::CREATED).json(FileResponse::from(file)))
}

async fn get_file(
    current_user: CurrentUser,
    file_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let file = files::get_file(&app_state, current_user.id, file_id.get()).await?;
    Ok(HttpResponse::Ok().json(FileResponse::from(file)))
}

async fn update_file(
    current_user: CurrentUser,
    file_id: ResourceId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<UpdateFileRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let file = files::update_file(
        &app_state,
        current_user.id,
        file_id.get(),
        FileInput {
            file_name: body.file_name,
            file_size: body.file_size,
            file_type: body.file_type,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(FileResponse::from(file)))
}

async fn delete_file(
    current_user: CurrentUser,
    file_id: ResourceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    files::delete_file(&app_state, current_user.id, file_id.get()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_file)).service(
        web::resource("/{id}")
            .route(web::get().to(get_file))
            .route(web::put().to(update_file))
            .route(web::delete().to(delete_file)),
    );
}
