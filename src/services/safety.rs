//! Digital-safety checklist service

use std::collections::BTreeSet;

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::{HavenResult, Rejection};
use crate::models::safety::{find_item, SafetyItem, SAFETY_ITEMS};
use crate::storage::Storage;

/// Service for the safety checklist
pub struct ChecklistService<'a> {
    storage: &'a Storage,
}

impl<'a> ChecklistService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn items(&self) -> &'static [SafetyItem] {
        SAFETY_ITEMS
    }

    /// Completed ids that are still part of the catalogue
    pub fn completed(&self) -> HavenResult<BTreeSet<String>> {
        let mut completed = self.storage.checklist().load()?;
        completed.retain(|id| find_item(id).is_some());
        Ok(completed)
    }

    /// Flip an item between done and not done, returning the new state
    pub fn toggle(&self, id: &str) -> HavenResult<bool> {
        let item = find_item(id).ok_or_else(|| Rejection::UnknownItem {
            kind: "checklist item",
            id: id.to_string(),
        })?;

        let mut completed = self.completed()?;
        let done = if completed.remove(item.id) {
            false
        } else {
            completed.insert(item.id.to_string());
            true
        };

        self.storage.checklist().save(&completed)?;
        self.storage.log(
            &AuditEntry::new(Operation::Toggle, EntityType::SafetyChecklist, item.id)
                .with_summary(if done { "done" } else { "not done" }),
        );

        Ok(done)
    }

    /// Percentage of the catalogue completed, rounded to a whole number
    pub fn progress(&self) -> HavenResult<u8> {
        Ok(progress_percent(self.completed()?.len(), SAFETY_ITEMS.len()))
    }

    /// Mark every item as not done
    pub fn reset(&self) -> HavenResult<()> {
        self.storage.checklist().clear()?;
        self.storage.log(&AuditEntry::new(
            Operation::Reset,
            EntityType::SafetyChecklist,
            "all",
        ));
        Ok(())
    }
}

fn progress_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (done as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;
    use crate::storage::KeyValueStore;

    #[test]
    fn test_toggle_round_trip() {
        let storage = Storage::in_memory();
        let service = ChecklistService::new(&storage);

        assert_eq!(service.progress().unwrap(), 0);
        assert!(service.toggle("faceid").unwrap());
        assert!(service.completed().unwrap().contains("faceid"));
        assert!(!service.toggle("faceid").unwrap());
        assert!(service.completed().unwrap().is_empty());
    }

    #[test]
    fn test_progress_rounds() {
        let storage = Storage::in_memory();
        let service = ChecklistService::new(&storage);

        service.toggle("safety-check").unwrap();
        // 1 of 8 = 12.5%
        assert_eq!(service.progress().unwrap(), 13);

        for item in SAFETY_ITEMS {
            if item.id != "safety-check" {
                service.toggle(item.id).unwrap();
            }
        }
        assert_eq!(service.progress().unwrap(), 100);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let storage = Storage::in_memory();
        let service = ChecklistService::new(&storage);

        let err = service.toggle("not-a-step").unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(storage.store().get(keys::SAFETY_COMPLETED).unwrap(), None);
    }

    #[test]
    fn test_stale_ids_ignored() {
        let storage = Storage::in_memory();
        storage
            .store()
            .set(keys::SAFETY_COMPLETED, r#"["faceid","retired-step"]"#)
            .unwrap();

        let service = ChecklistService::new(&storage);
        assert_eq!(service.completed().unwrap().len(), 1);
        assert_eq!(service.progress().unwrap(), 13);
    }

    #[test]
    fn test_toggle_succeeds_when_log_is_unwritable() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&log_path).unwrap();
        let storage = Storage::in_memory().with_audit(crate::audit::AuditLogger::new(log_path));
        let service = ChecklistService::new(&storage);

        assert!(service.toggle("faceid").unwrap());
        assert!(service.completed().unwrap().contains("faceid"));
        service.reset().unwrap();
        assert_eq!(service.progress().unwrap(), 0);
    }

    #[test]
    fn test_reset() {
        let storage = Storage::in_memory();
        let service = ChecklistService::new(&storage);
        service.toggle("faceid").unwrap();

        service.reset().unwrap();
        assert_eq!(service.progress().unwrap(), 0);
    }

    #[test]
    fn test_progress_percent_edges() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
    }
}
