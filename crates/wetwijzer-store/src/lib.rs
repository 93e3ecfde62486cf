//! Storage layer: knowledge-base loading, hot-reloadable snapshots, query history.

mod error;
pub use error::StoreError;

pub mod history;
pub mod loader;
mod shared;

pub use history::{HistoryEntry, HistoryStore, InMemoryHistory, JsonFileHistory};
pub use loader::{builtin, load_dir};
pub use shared::SharedKnowledgeBase;
