use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::{fs, io};

use tracing::warn;

use crate::error::{StorageError, StorageResult};

/// Raw string-keyed storage, the layer under [`crate::KvStore`].
///
/// Implementations are shared mutable state reachable from any component;
/// writes are last-write-wins with no optimistic concurrency check.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str);
    fn clear(&self);
}

/// Thread-safe in-memory backend. Session-scoped; also the test double.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.remove(key);
    }

    fn clear(&self) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.clear();
    }
}

/// Durable backend persisting the whole map as a single JSON object file.
///
/// Every write rewrites the file, so entries survive process restarts the
/// way browser-durable storage survives page reloads. A missing or corrupt
/// file opens empty rather than failing.
pub struct FileBackend {
    path: PathBuf,
    inner: RwLock<HashMap<String, String>>,
}

impl FileBackend {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "storage file is corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "storage file unreadable, starting empty");
                HashMap::new()
            }
        };

        Self {
            path,
            inner: RwLock::new(entries),
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let body =
            serde_json::to_string(entries).map_err(|err| StorageError::Serialize(err.to_string()))?;
        fs::write(&self.path, body)
            .map_err(|err| StorageError::Write(self.path.display().to_string(), err.to_string()))
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.insert(key.to_string(), value.to_string());
        self.flush(&guard)
    }

    fn remove_item(&self, key: &str) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        if guard.remove(key).is_some() {
            if let Err(err) = self.flush(&guard) {
                warn!(key, %err, "failed to persist removal");
            }
        }
    }

    fn clear(&self) {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.clear();
        if let Err(err) = self.flush(&guard) {
            warn!(%err, "failed to persist clear");
        }
    }
}
