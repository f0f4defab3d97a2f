//! String-keyed JSON slot storage
//!
//! The local profile store persists into two string-keyed slots. The
//! file-backed implementation keeps all slots in one JSON object on disk;
//! the in-memory implementation backs the process-wide degradation path.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use blueforce_domain::{BlueForceError, Result};
use parking_lot::Mutex;

/// String-keyed persistent slot storage
pub trait KeyValueStorage: Send + Sync {
    /// Read a slot; `None` when the slot was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, creating it if needed
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot; deleting an absent slot is a no-op
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one JSON object mapping slot keys to slot values
///
/// Every write rewrites the whole file. Not atomic against concurrent
/// writers from other processes; the store contract assumes a single
/// single-threaded client.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    fn read_slots(path: &Path) -> Result<HashMap<String, String>> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|err| BlueForceError::Storage(format!("corrupt slot file: {err}"))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(BlueForceError::Storage(format!("read failed: {err}"))),
        }
    }

    fn write_slots(path: &Path, slots: &HashMap<String, String>) -> Result<()> {
        let contents = serde_json::to_string(slots)
            .map_err(|err| BlueForceError::Storage(format!("encode failed: {err}")))?;
        fs::write(path, contents)
            .map_err(|err| BlueForceError::Storage(format!("write failed: {err}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(Self::read_slots(&self.path)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut slots = Self::read_slots(&self.path)?;
        slots.insert(key.to_string(), value.to_string());
        Self::write_slots(&self.path, &slots)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut slots = Self::read_slots(&self.path)?;
        if slots.remove(key).is_some() {
            Self::write_slots(&self.path, &slots)?;
        }
        Ok(())
    }
}

/// In-memory storage used as the process-wide fallback
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.lock().remove(key);
        Ok(())
    }
}
