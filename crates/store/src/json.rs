//! File-backed storage backend.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{info, warn};

use crate::backend::StoreBackend;
use crate::errors::StoreResult;

/// Durable backend persisting the whole key space as a single JSON
/// document on disk.
///
/// Every mutation rewrites the file before returning, so a completed call
/// is durable. A missing or malformed data file is treated as empty rather
/// than raised to callers; write failures still propagate.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Open the data file at `path`, creating parent directories as needed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, Value>>(&contents) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(path = %path.display(), %error, "data file is malformed, starting empty");
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error.into()),
        };

        info!(path = %path.display(), keys = entries.len(), "data file opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) -> StoreResult<()> {
        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

impl StoreBackend for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> StoreResult<()> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.clone());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
