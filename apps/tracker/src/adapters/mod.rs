//! Store implementations.

pub mod learning_memory;
pub mod users_memory;

pub use learning_memory::MemoryLearningStore;
pub use users_memory::MemoryUserStore;
