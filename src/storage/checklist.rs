//! Safety checklist repository

use std::collections::BTreeSet;

use crate::error::HavenResult;

use super::keys;
use super::kv::KeyValueStore;

/// Loads and saves the set of completed checklist ids
pub struct ChecklistRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ChecklistRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Completed ids; missing or malformed data means nothing is done yet
    pub fn load(&self) -> HavenResult<BTreeSet<String>> {
        Ok(self
            .store
            .get(keys::SAFETY_COMPLETED)?
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default())
    }

    pub fn save(&self, completed: &BTreeSet<String>) -> HavenResult<()> {
        let ids: Vec<&String> = completed.iter().collect();
        let raw = serde_json::to_string(&ids)?;
        self.store.set(keys::SAFETY_COMPLETED, &raw)
    }

    pub fn clear(&self) -> HavenResult<()> {
        self.store.remove(keys::SAFETY_COMPLETED)
    }
}
