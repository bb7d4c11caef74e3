//! Owner checks shared by the goal, entry and file services.
//!
//! A record is looked up first (missing means 404), then its owner is
//! compared with the authenticated user (mismatch means 403).

use tracing::warn;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::learning::{Entry, FileRecord, Goal};
use crate::state::app_state::AppState;

pub fn ensure_owner(owner_id: i64, user_id: i64) -> Result<(), AppError> {
    if owner_id != user_id {
        warn!(owner_id, user_id, "ownership check failed");
        return Err(AppError::not_owner());
    }
    Ok(())
}

pub async fn owned_goal(state: &AppState, user_id: i64, goal_id: i64) -> Result<Goal, AppError> {
    let goal = state
        .learning
        .find_goal(goal_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::GoalNotFound, format!("Goal {goal_id} not found")))?;
    ensure_owner(goal.user_id, user_id)?;
    Ok(goal)
}

pub async fn owned_entry(state: &AppState, user_id: i64, entry_id: i64) -> Result<Entry, AppError> {
    let entry = state.learning.find_entry(entry_id).await?.ok_or_else(|| {
        AppError::not_found(ErrorCode::EntryNotFound, format!("Entry {entry_id} not found"))
    })?;
    ensure_owner(entry.user_id, user_id)?;
    Ok(entry)
}

pub async fn owned_file(
    state: &AppState,
    user_id: i64,
    file_id: i64,
) -> Result<FileRecord, AppError> {
    let file = state
        .learning
        .find_file(file_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::FileNotFound, format!("File {file_id} not found")))?;
    ensure_owner(file.user_id, user_id)?;
    Ok(file)
}
