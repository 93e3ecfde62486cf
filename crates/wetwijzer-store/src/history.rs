//! Query history: situations with their analysis results.
//!
//! The analyzer never touches history. Callers append results after a
//! successful analysis and may list or clear them.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wetwijzer_core::AnalysisResult;

use crate::StoreError;

/// One analysed situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub situation: String,
    pub result: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Stamp an entry with the current time.
    pub fn new(situation: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            situation: situation.into(),
            result,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only history with a clear operation.
pub trait HistoryStore: Send + Sync {
    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError>;

    /// All entries, oldest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    m.lock()
        .map_err(|e| StoreError::History(format!("mutex poisoned: {e}")))
}

/// Process-local history, lost on exit.
#[derive(Default)]
pub struct InMemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        lock(&self.entries)?.push(entry);
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(lock(&self.entries)?.clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        lock(&self.entries)?.clear();
        Ok(())
    }
}

/// History persisted as a JSON array in a single file.
///
/// Every write replaces the whole file through a temporary file in the same
/// directory, so a crash mid-write leaves the previous contents intact.
pub struct JsonFileHistory {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileHistory {
    /// Open the history file at `path`. The file is created on first append.
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let src = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        if src.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&src).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let json = serde_json::to_vec_pretty(entries).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&json)
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        debug!(path = %self.path.display(), count = entries.len(), "wrote history");
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let _guard = lock(&self.write_lock)?;
        let mut entries = self.read()?;
        entries.push(entry);
        self.write(&entries)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        self.read()
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = lock(&self.write_lock)?;
        self.write(&[])?;
        info!(path = %self.path.display(), "history cleared");
        Ok(())
    }
}
