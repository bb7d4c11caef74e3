//! Store traits and the domain records they hold.
//!
//! Services depend only on these traits; `AppState` carries the concrete
//! implementations as trait objects.

pub mod learning;
pub mod users;

pub use learning::{
    Entry, EntryChanges, EntryStatus, FileChanges, FileRecord, Goal, GoalChanges, LearningStore,
    NewEntry, NewFile, NewGoal,
};
pub use users::{NewUser, User, UserChanges, UserStore};
