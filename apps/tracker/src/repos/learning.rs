//! Goal, entry and file store contract.
//!
//! Every record carries its owning `user_id`; the store never decides who
//! may touch a record, it only persists what services hand it.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub user_id: i64,
    pub title: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct GoalChanges {
    pub title: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl EntryStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Self::NotStarted),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            other => Err(DomainError::validation(format!(
                "unknown entry status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub goal_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub date: OffsetDateTime,
    pub status: EntryStatus,
}

#[derive(Debug, Clone)]
pub struct NewEntry {
    pub goal_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct EntryChanges {
    pub title: String,
    pub description: String,
    pub status: EntryStatus,
}

/// Metadata for a file attached to an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: i64,
    pub entry_id: i64,
    pub user_id: i64,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    pub file_path: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewFile {
    pub entry_id: i64,
    pub user_id: i64,
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    pub file_path: String,
}

#[derive(Debug, Clone)]
pub struct FileChanges {
    pub file_name: String,
    pub file_size: u64,
    pub file_type: String,
    pub file_path: String,
}

#[async_trait]
pub trait LearningStore: Send + Sync {
    async fn create_goal(&self, goal: NewGoal) -> Result<Goal, DomainError>;
    async fn find_goal(&self, id: i64) -> Result<Option<Goal>, DomainError>;
    async fn list_goals_for_user(&self, user_id: i64) -> Result<Vec<Goal>, DomainError>;
    async fn update_goal(&self, id: i64, changes: GoalChanges) -> Result<Goal, DomainError>;
    /// Also removes the goal's entries and their files.
    async fn delete_goal(&self, id: i64) -> Result<(), DomainError>;

    async fn create_entry(&self, entry: NewEntry) -> Result<Entry, DomainError>;
    async fn find_entry(&self, id: i64) -> Result<Option<Entry>, DomainError>;
    async fn list_entries_for_goal(&self, goal_id: i64) -> Result<Vec<Entry>, DomainError>;
    async fn update_entry(&self, id: i64, changes: EntryChanges) -> Result<Entry, DomainError>;
    /// Also removes the entry's files.
    async fn delete_entry(&self, id: i64) -> Result<(), DomainError>;

    async fn create_file(&self, file: NewFile) -> Result<FileRecord, DomainError>;
    async fn find_file(&self, id: i64) -> Result<Option<FileRecord>, DomainError>;
    async fn list_files_for_entry(&self, entry_id: i64) -> Result<Vec<FileRecord>, DomainError>;
    async fn update_file(&self, id: i64, changes: FileChanges) -> Result<FileRecord, DomainError>;
    async fn delete_file(&self, id: i64) -> Result<(), DomainError>;

    /// Remove every goal, entry and file owned by `user_id`.
    async fn delete_all_for_user(&self, user_id: i64) -> Result<(), DomainError>;
}
