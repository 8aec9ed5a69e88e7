//! Storage layer for Haven
//!
//! A single [`KeyValueStore`] holds every persisted value. Repositories give
//! each component a typed view over its own keys, and [`Storage`] ties the
//! store to the activity log.

pub mod checklist;
pub mod file_io;
pub mod inputs;
pub mod keys;
pub mod kv;
pub mod stash;

pub use checklist::ChecklistRepository;
pub use inputs::InputRepository;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use stash::StashRepository;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::HavenPaths;
use crate::error::HavenError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the file-backed store and activity log under `paths`
    pub fn open(paths: &HavenPaths) -> Result<Self, HavenError> {
        paths.ensure_directories()?;

        Ok(Self {
            store: Box::new(FileStore::open(paths.store_file())?),
            audit: Some(AuditLogger::new(paths.audit_log())),
        })
    }

    /// Storage that lives only in memory and keeps no activity log
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Wrap an arbitrary store
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self { store, audit: None }
    }

    /// Attach an activity log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn inputs(&self) -> InputRepository<'_> {
        InputRepository::new(self.store.as_ref())
    }

    pub fn stash(&self) -> StashRepository<'_> {
        StashRepository::new(self.store.as_ref())
    }

    pub fn checklist(&self) -> ChecklistRepository<'_> {
        ChecklistRepository::new(self.store.as_ref())
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an entry in the activity log, if one is attached
    ///
    /// Called after the store write has landed, so a failed append only
    /// warns; the operation itself has already taken effect.
    pub fn log(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                eprintln!("Warning: activity not recorded: {}", e);
            }
        }
    }

    /// Drop every activity log entry about `entity_type`
    pub fn purge_log(&self, entity_type: EntityType) -> Result<(), HavenError> {
        match &self.audit {
            Some(logger) => logger.purge(entity_type),
            None => Ok(()),
        }
    }
}
