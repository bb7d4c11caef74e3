//! File metadata. Bytes are never read or written here; the service only
//! validates the declared size and decides where the upload belongs.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use super::ownership::{owned_entry, owned_file};
use crate::config::UploadConfig;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::learning::{Entry, FileChanges, FileRecord, NewFile};
use crate::state::app_state::AppState;

#[derive(Debug, Clone)]
pub struct FileInput {
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
}

/// `{root}/{user}/{goal}/{entry}/{unix_nanos}_{name}`
pub fn storage_path(uploads: &UploadConfig, entry: &Entry, nanos: u128, file_name: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}_{}",
        uploads.root, entry.user_id, entry.goal_id, entry.id, nanos, file_name
    )
}

/// Last path component only, so a name cannot climb out of its directory.
fn clean_name(raw: &str) -> Result<String, AppError> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::validation("File name is required"));
    }
    Ok(name.to_string())
}

fn check_size(uploads: &UploadConfig, size: u64) -> Result<(), AppError> {
    if size > uploads.max_bytes {
        return Err(AppError::invalid(
            ErrorCode::FileTooLarge,
            format!("File exceeds the {} byte limit", uploads.max_bytes),
        ));
    }
    Ok(())
}

fn unix_nanos() -> Result<u128, AppError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .map_err(|_| AppError::internal("system clock before unix epoch"))
}

pub async fn create_file(
    state: &AppState,
    user_id: i64,
    entry_id: i64,
    input: FileInput,
) -> Result<FileRecord, AppError> {
    let entry = owned_entry(state, user_id, entry_id).await?;
    let file_name = clean_name(&input.file_name)?;
    check_size(&state.uploads, input.file_size)?;

    let file_path = storage_path(&state.uploads, &entry, unix_nanos()?, &file_name);
    let file = state
        .learning
        .create_file(NewFile {
            entry_id,
            user_id,
            file_name,
            file_size: input.file_size,
            file_type: input.file_type,
            file_path,
        })
        .await?;
    info!(user_id, entry_id, file_id = file.id, size = file.file_size, "file recorded");
    Ok(file)
}

pub async fn get_file(state: &AppState, user_id: i64, file_id: i64) -> Result<FileRecord, AppError> {
    owned_file(state, user_id, file_id).await
}

/// Replace a file's metadata; the path is recomputed for the new name.
pub async fn update_file(
    state: &AppState,
    user_id: i64,
    file_id: i64,
    input: FileInput,
) -> Result<FileRecord, AppError> {
    let existing = owned_file(state, user_id, file_id).await?;
    let entry = owned_entry(state, user_id, existing.entry_id).await?;
    let file_name = clean_name(&input.file_name)?;
    check_size(&state.uploads, input.file_size)?;

    let file_path = storage_path(&state.uploads, &entry, unix_nanos()?, &file_name);
    let file = state
        .learning
        .update_file(
            file_id,
            FileChanges {
                file_name,
                file_size: input.file_size,
                file_type: input.file_type,
                file_path,
            },
        )
        .await?;
    info!(user_id, file_id, "file updated");
    Ok(file)
}

pub async fn delete_file(state: &AppState, user_id: i64, file_id: i64) -> Result<(), AppError> {
    owned_file(state, user_id, file_id).await?;
    state.learning.delete_file(file_id).await?;
    info!(user_id, file_id, "file deleted");
    Ok(())
}
