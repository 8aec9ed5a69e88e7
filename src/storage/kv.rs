//! Key-value stores
//!
//! Every piece of persisted state is a string under a fixed key. Components
//! never touch files directly; they receive a [`KeyValueStore`] and go
//! through it, which lets tests swap in [`MemoryStore`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{HavenError, HavenResult};

use super::file_io::{read_json_lenient, write_json_atomic};

/// Durable string-to-string storage
///
/// `set_many` and `remove_many` apply all their changes or none of them.
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> HavenResult<Option<String>>;

    /// Write several values in one step
    fn set_many(&self, entries: &[(&str, &str)]) -> HavenResult<()>;

    /// Remove several keys in one step; missing keys are ignored
    fn remove_many(&self, keys: &[&str]) -> HavenResult<()>;

    /// All keys currently present, sorted
    fn keys(&self) -> HavenResult<Vec<String>>;

    /// Write a single value
    fn set(&self, key: &str, value: &str) -> HavenResult<()> {
        self.set_many(&[(key, value)])
    }

    /// Remove a single key
    fn remove(&self, key: &str) -> HavenResult<()> {
        self.remove_many(&[key])
    }
}

type Entries = BTreeMap<String, String>;

fn apply_set(entries: &mut Entries, changes: &[(&str, &str)]) {
    for (key, value) in changes {
        entries.insert((*key).to_string(), (*value).to_string());
    }
}

fn apply_remove(entries: &mut Entries, keys: &[&str]) -> bool {
    let mut changed = false;
    for key in keys {
        changed |= entries.remove(*key).is_some();
    }
    changed
}

/// In-memory store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> HavenResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, changes: &[(&str, &str)]) -> HavenResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        apply_set(&mut entries, changes);
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> HavenResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        apply_remove(&mut entries, keys);
        Ok(())
    }

    fn keys(&self) -> HavenResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.keys().cloned().collect())
    }
}

/// Store backed by a single JSON object on disk
///
/// The file is read once when the store is opened. Every mutation rewrites
/// it atomically before the in-memory copy is updated, so a crash never
/// leaves memory and disk disagreeing about a completed write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. So is a file that is not a JSON
    /// object of strings: corrupt state is discarded, not reported.
    pub fn open(path: impl Into<PathBuf>) -> HavenResult<Self> {
        let path = path.into();
        let entries: Entries = read_json_lenient(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, change: impl FnOnce(&mut Entries) -> bool) -> HavenResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }

        write_json_atomic(&self.path, &next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> HavenResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, changes: &[(&str, &str)]) -> HavenResult<()> {
        self.mutate(|entries| {
            apply_set(entries, changes);
            true
        })
    }

    fn remove_many(&self, keys: &[&str]) -> HavenResult<()> {
        self.mutate(|entries| apply_remove(entries, keys))
    }

    fn keys(&self) -> HavenResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| HavenError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.keys().cloned().collect())
    }
}
