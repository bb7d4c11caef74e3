use tracing::info;

use super::ownership::{owned_entry, owned_goal};
use crate::error::AppError;
use crate::repos::learning::{Entry, EntryChanges, EntryStatus, FileRecord, NewEntry};
use crate::state::app_state::AppState;

fn require_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::validation("Entry title is required"));
    }
    Ok(title.to_string())
}

/// New entries start as "Not Started" under a goal the caller owns.
pub async fn create_entry(
    state: &AppState,
    user_id: i64,
    goal_id: i64,
    title: &str,
    description: &str,
) -> Result<Entry, AppError> {
    owned_goal(state, user_id, goal_id).await?;
    let title = require_title(title)?;

    let entry = state
        .learning
        .create_entry(NewEntry {
            goal_id,
            user_id,
            title,
            description: description.to_string(),
        })
        .await?;
    info!(user_id, goal_id, entry_id = entry.id, "entry created");
    Ok(entry)
}

pub async fn get_entry(state: &AppState, user_id: i64, entry_id: i64) -> Result<Entry, AppError> {
    owned_entry(state, user_id, entry_id).await
}

pub async fn update_entry(
    state: &AppState,
    user_id: i64,
    entry_id: i64,
    title: &str,
    description: &str,
    status: EntryStatus,
) -> Result<Entry, AppError> {
    owned_entry(state, user_id, entry_id).await?;
    let title = require_title(title)?;
    let entry = state
        .learning
        .update_entry(
            entry_id,
            EntryChanges {
                title,
                description: description.to_string(),
                status,
            },
        )
        .await?;
    info!(user_id, entry_id, status = %entry.status, "entry updated");
    Ok(entry)
}

pub async fn delete_entry(state: &AppState, user_id: i64, entry_id: i64) -> Result<(), AppError> {
    owned_entry(state, user_id, entry_id).await?;
    state.learning.delete_entry(entry_id).await?;
    info!(user_id, entry_id, "entry deleted");
    Ok(())
}

pub async fn list_entry_files(
    state: &AppState,
    user_id: i64,
    entry_id: i64,
) -> Result<Vec<FileRecord>, AppError> {
    owned_entry(state, user_id, entry_id).await?;
    Ok(state.learning.list_files_for_entry(entry_id).await?)
}
