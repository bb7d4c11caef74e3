use time::OffsetDateTime;
use tracing::info;

use super::ownership::owned_goal;
use crate::error::AppError;
use crate::repos::learning::{Entry, Goal, GoalChanges, NewGoal};
use crate::state::app_state::AppState;

/// Fields supplied by the client for create and update.
#[derive(Debug, Clone)]
pub struct GoalInput {
    pub title: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}

impl GoalInput {
    fn validate(self) -> Result<Self, AppError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::validation("Goal title is required"));
        }
        if self.end_date < self.start_date {
            return Err(AppError::validation("Goal end date precedes its start date"));
        }
        Ok(Self { title, ..self })
    }
}

pub async fn create_goal(state: &AppState, user_id: i64, input: GoalInput) -> Result<Goal, AppError> {
    let input = input.validate()?;

    // A valid token can outlive its account.
    if state.users.find_user_by_id(user_id).await?.is_none() {
        return Err(AppError::forbidden_user_not_found());
    }

    let goal = state
        .learning
        .create_goal(NewGoal {
            user_id,
            title: input.title,
            start_date: input.start_date,
            end_date: input.end_date,
        })
        .await?;
    info!(user_id, goal_id = goal.id, "goal created");
    Ok(goal)
}

pub async fn list_goals(state: &AppState, user_id: i64) -> Result<Vec<Goal>, AppError> {
    Ok(state.learning.list_goals_for_user(user_id).await?)
}

pub async fn get_goal(state: &AppState, user_id: i64, goal_id: i64) -> Result<Goal, AppError> {
    owned_goal(state, user_id, goal_id).await
}

pub async fn update_goal(
    state: &AppState,
    user_id: i64,
    goal_id: i64,
    input: GoalInput,
) -> Result<Goal, AppError> {
    owned_goal(state, user_id, goal_id).await?;
    let input = input.validate()?;
    let goal = state
        .learning
        .update_goal(
            goal_id,
            GoalChanges {
                title: input.title,
                start_date: input.start_date,
                end_date: input.end_date,
            },
        )
        .await?;
    info!(user_id, goal_id, "goal updated");
    Ok(goal)
}

pub async fn delete_goal(state: &AppState, user_id: i64, goal_id: i64) -> Result<(), AppError> {
    owned_goal(state, user_id, goal_id).await?;
    state.learning.delete_goal(goal_id).await?;
    info!(user_id, goal_id, "goal deleted");
    Ok(())
}

pub async fn list_goal_entries(
    state: &AppState,
    user_id: i64,
    goal_id: i64,
) -> Result<Vec<Entry>, AppError> {
    owned_goal(state, user_id, goal_id).await?;
    Ok(state.learning.list_entries_for_goal(goal_id).await?)
}
