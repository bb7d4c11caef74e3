//! In-process goal/entry/file store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::learning::{
    Entry, EntryChanges, EntryStatus, FileChanges, FileRecord, Goal, GoalChanges, LearningStore,
    NewEntry, NewFile, NewGoal,
};

#[derive(Debug, Default)]
struct Tables {
    last_goal_id: i64,
    last_entry_id: i64,
    last_file_id: i64,
    goals: BTreeMap<i64, Goal>,
    entries: BTreeMap<i64, Entry>,
    files: BTreeMap<i64, FileRecord>,
}

impl Tables {
    fn drop_entries_where(&mut self, pred: impl Fn(&Entry) -> bool) {
        let doomed: Vec<i64> = self
            .entries
            .values()
            .filter(|e| pred(e))
            .map(|e| e.id)
            .collect();
        for id in &doomed {
            self.entries.remove(id);
        }
        self.files.retain(|_, f| !doomed.contains(&f.entry_id));
    }
}

fn missing(kind: NotFoundKind, id: i64) -> DomainError {
    let label = match kind {
        NotFoundKind::User => "user",
        NotFoundKind::Goal => "goal",
        NotFoundKind::Entry => "entry",
        NotFoundKind::File => "file",
    };
    DomainError::not_found(kind, format!("{label} {id} not found"))
}

/// `LearningStore` backed by ordered maps behind one `parking_lot::RwLock`.
///
/// One lock covers all three tables so cascading deletes are atomic.
#[derive(Debug, Default)]
pub struct MemoryLearningStore {
    inner: RwLock<Tables>,
}

impl MemoryLearningStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LearningStore for MemoryLearningStore {
    async fn create_goal(&self, goal: NewGoal) -> Result<Goal, DomainError> {
        let mut t = self.inner.write();
        t.last_goal_id += 1;
        let goal = Goal {
            id: t.last_goal_id,
            user_id: goal.user_id,
            title: goal.title,
            start_date: goal.start_date,
            end_date: goal.end_date,
        };
        t.goals.insert(goal.id, goal.clone());
        Ok(goal)
    }

    async fn find_goal(&self, id: i64) -> Result<Option<Goal>, DomainError> {
        Ok(self.inner.read().goals.get(&id).cloned())
    }

    async fn list_goals_for_user(&self, user_id: i64) -> Result<Vec<Goal>, DomainError> {
        Ok(self
            .inner
            .read()
            .goals
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_goal(&self, id: i64, changes: GoalChanges) -> Result<Goal, DomainError> {
        let mut t = self.inner.write();
        let goal = t
            .goals
            .get_mut(&id)
            .ok_or_else(|| missing(NotFoundKind::Goal, id))?;
        goal.title = changes.title;
        goal.start_date = changes.start_date;
        goal.end_date = changes.end_date;
        Ok(goal.clone())
    }

    async fn delete_goal(&self, id: i64) -> Result<(), DomainError> {
        let mut t = self.inner.write();
        t.goals
            .remove(&id)
            .ok_or_else(|| missing(NotFoundKind::Goal, id))?;
        t.drop_entries_where(|e| e.goal_id == id);
        Ok(())
    }

    async fn create_entry(&self, entry: NewEntry) -> Result<Entry, DomainError> {
        let mut t = self.inner.write();
        if !t.goals.contains_key(&entry.goal_id) {
            return Err(missing(NotFoundKind::Goal, entry.goal_id));
        }
        t.last_entry_id += 1;
        let entry = Entry {
            id: t.last_entry_id,
            goal_id: entry.goal_id,
            user_id: entry.user_id,
            title: entry.title,
            description: entry.description,
            date: OffsetDateTime::now_utc(),
            status: EntryStatus::default(),
        };
        t.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_entry(&self, id: i64) -> Result<Option<Entry>, DomainError> {
        Ok(self.inner.read().entries.get(&id).cloned())
    }

    async fn list_entries_for_goal(&self, goal_id: i64) -> Result<Vec<Entry>, DomainError> {
        Ok(self
            .inner
            .read()
            .entries
            .values()
            .filter(|e| e.goal_id == goal_id)
            .cloned()
            .collect())
    }

    async fn update_entry(&self, id: i64, changes: EntryChanges) -> Result<Entry, DomainError> {
        let mut t = self.inner.write();
        let entry = t
            .entries
            .get_mut(&id)
            .ok_or_else(|| missing(NotFoundKind::Entry, id))?;
        entry.title = changes.title;
        entry.description = changes.description;
        entry.status = changes.status;
        Ok(entry.clone())
    }

    async fn delete_entry(&self, id: i64) -> Result<(), DomainError> {
        let mut t = self.inner.write();
        if !t.entries.contains_key(&id) {
            return Err(missing(NotFoundKind::Entry, id));
        }
        t.drop_entries_where(|e| e.id == id);
        Ok(())
    }

    async fn create_file(&self, file: NewFile) -> Result<FileRecord, DomainError> {
        let mut t = self.inner.write();
        if !t.entries.contains_key(&file.entry_id) {
            return Err(missing(NotFoundKind::Entry, file.entry_id));
        }
        t.last_file_id += 1;
        let record = FileRecord {
            id: t.last_file_id,
            entry_id: file.entry_id,
            user_id: file.user_id,
            file_name: file.file_name,
            file_size: file.file_size,
            file_type: file.file_type,
            file_path: file.file_path,
            created_at: OffsetDateTime::now_utc(),
        };
        t.files.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_file(&self, id: i64) -> Result<Option<FileRecord>, DomainError> {
        Ok(self.inner.read().files.get(&id).cloned())
    }

    async fn list_files_for_entry(&self, entry_id: i64) -> Result<Vec<FileRecord>, DomainError> {
        Ok(self
            .inner
            .read()
            .files
            .values()
            .filter(|f| f.entry_id == entry_id)
            .cloned()
            .collect())
    }

    async fn update_file(&self, id: i64, changes: FileChanges) -> Result<FileRecord, DomainError> {
        let mut t = self.inner.write();
        let file = t
            .files
            .get_mut(&id)
            .ok_or_else(|| missing(NotFoundKind::File, id))?;
        file.file_name = changes.file_name;
        file.file_size = changes.file_size;
        file.file_type = changes.file_type;
        file.file_path = changes.file_path;
        Ok(file.clone())
    }

    async fn delete_file(&self, id: i64) -> Result<(), DomainError> {
        self.inner
            .write()
            .files
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| missing(NotFoundKind::File, id))
    }

    async fn delete_all_for_user(&self, user_id: i64) -> Result<(), DomainError> {
        let mut t = self.inner.write();
        t.files.retain(|_, f| f.user_id != user_id);
        t.entries.retain(|_, e| e.user_id != user_id);
        t.goals.retain(|_, g| g.user_id != user_id);
        Ok(())
    }
}
