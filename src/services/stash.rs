//! Secret stash service
//!
//! Records cash hidden at home. Every deposit is written through to the
//! store before it is reported; a wipe erases the ledger and its activity
//! log entries in one go.

use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone};

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::config::settings::Settings;
use crate::error::HavenResult;
use crate::models::{Amount, EntryId, StashEntry, StashLedger};
use crate::storage::Storage;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Service for the stash ledger
pub struct StashService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> StashService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Current ledger; bad stored data reads as an empty ledger
    pub fn load(&self) -> HavenResult<StashLedger> {
        self.storage.stash().load()
    }

    /// Parse raw text and deposit it
    pub fn deposit_raw(&self, raw_amount: &str) -> HavenResult<StashEntry> {
        let amount = Amount::parse("amount", raw_amount)?;
        self.deposit_at(amount.value(), Local::now())
    }

    /// Deposit an amount now
    pub fn deposit(&self, amount: f64) -> HavenResult<StashEntry> {
        self.deposit_at(amount, Local::now())
    }

    /// Deposit an amount at the given time
    ///
    /// Nothing is read or written when the amount is rejected.
    pub fn deposit_at<Tz>(&self, amount: f64, now: DateTime<Tz>) -> HavenResult<StashEntry>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let amount = Amount::new("amount", amount)?;

        let repo = self.storage.stash();
        let mut ledger = repo.load()?;

        let entry = StashEntry {
            id: EntryId::next(now.timestamp_millis(), ledger.latest_id()),
            amount,
            date: format_date(&now, &self.settings.date_format),
            note: self.settings.deposit_note.clone(),
        };

        ledger.record(entry.clone());
        repo.save(&ledger)?;

        self.storage
            .log(&AuditEntry::new(Operation::Deposit, EntityType::Stash, entry.id.to_string()));

        Ok(entry)
    }

    /// Erase the ledger and every activity log line about it
    ///
    /// Wiping an empty ledger succeeds and changes nothing.
    pub fn wipe(&self) -> HavenResult<()> {
        self.storage.stash().erase()?;
        self.storage.purge_log(EntityType::Stash)
    }
}

/// Format a date, falling back to ISO format when the pattern is invalid
fn format_date<Tz>(when: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", when.format(pattern)).is_ok() {
        return out;
    }
    when.format(FALLBACK_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::storage::keys;
    use crate::storage::{FileStore, KeyValueStore};
    use chrono::Utc;
    use tempfile::TempDir;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_deposits_accumulate() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);

        let amounts = [5.0, 10.0, 2.5, 7.25];
        for (i, amount) in amounts.iter().enumerate() {
            service
                .deposit_at(*amount, at(1_760_000_000_000 + i as i64))
                .unwrap();
        }

        let ledger = service.load().unwrap();
        assert_eq!(ledger.balance, amounts.iter().sum::<f64>());
        assert_eq!(ledger.history.len(), amounts.len());
        assert_eq!(ledger.history[0].amount.value(), 7.25);
        assert_eq!(ledger.history[3].amount.value(), 5.0);
    }

    #[test]
    fn test_entry_fields() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);

        // 2026-10-16T09:00:00Z
        let entry = service.deposit_at(20.0, at(1_792_141_200_000)).unwrap();
        assert_eq!(entry.id, EntryId::from_millis(1_792_141_200_000));
        assert_eq!(entry.date, "16.10.2026");
        assert_eq!(entry.note, "Manual deposit");
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);

        let first = service.deposit_at(1.0, at(1000)).unwrap();
        let second = service.deposit_at(1.0, at(1000)).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_invalid_deposit_changes_nothing() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);
        service.deposit_at(5.0, at(1000)).unwrap();
        let before = service.load().unwrap();
        let stored_before = storage.store().get(keys::STASH_HISTORY).unwrap();

        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = service.deposit_at(bad, at(2000)).unwrap_err();
            assert!(err.is_rejection());
        }
        assert!(service.deposit_raw("five").unwrap_err().is_rejection());

        assert_eq!(service.load().unwrap(), before);
        assert_eq!(
            storage.store().get(keys::STASH_HISTORY).unwrap(),
            stored_before
        );
    }

    #[test]
    fn test_wipe_is_idempotent() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);
        service.deposit_at(5.0, at(1000)).unwrap();

        service.wipe().unwrap();
        let once = service.load().unwrap();
        service.wipe().unwrap();
        let twice = service.load().unwrap();

        assert_eq!(once, StashLedger::empty());
        assert_eq!(once, twice);
        assert_eq!(storage.store().get(keys::STASH_BALANCE).unwrap(), None);
        assert_eq!(storage.store().get(keys::STASH_HISTORY).unwrap(), None);
    }

    #[test]
    fn test_deposit_after_wipe_starts_fresh() {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);
        service.deposit_at(5.0, at(1000)).unwrap();
        service.wipe().unwrap();

        service.deposit_at(3.0, at(2000)).unwrap();
        let ledger = service.load().unwrap();
        assert_eq!(ledger.balance, 3.0);
        assert_eq!(ledger.history.len(), 1);
    }

    #[test]
    fn test_deposit_is_durable_and_wipe_leaves_no_trace() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("store.json");
        let log_path = temp_dir.path().join("audit.log");
        let settings = Settings::default();

        {
            let storage = Storage::with_store(Box::new(FileStore::open(&store_path).unwrap()))
                .with_audit(AuditLogger::new(log_path.clone()));
            let service = StashService::new(&storage, &settings);
            service.deposit_at(12.5, at(1000)).unwrap();
            storage
                .log(&AuditEntry::new(Operation::Update, EntityType::LoanInputs, "loan"));
        }

        let storage = Storage::with_store(Box::new(FileStore::open(&store_path).unwrap()))
            .with_audit(AuditLogger::new(log_path.clone()));
        let service = StashService::new(&storage, &settings);
        assert_eq!(service.load().unwrap().balance, 12.5);

        service.wipe().unwrap();

        let reopened = FileStore::open(&store_path).unwrap();
        assert!(reopened.keys().unwrap().is_empty());
        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(!log.contains("stash"));
        assert!(log.contains("loan_inputs"));
    }

    #[test]
    fn test_deposit_succeeds_when_log_is_unwritable() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&log_path).unwrap();
        let storage = Storage::with_store(Box::new(
            FileStore::open(temp_dir.path().join("store.json")).unwrap(),
        ))
        .with_audit(AuditLogger::new(log_path));
        let settings = Settings::default();
        let service = StashService::new(&storage, &settings);

        service.deposit_at(10.0, at(1000)).unwrap();
        let ledger = service.load().unwrap();
        assert_eq!(ledger.balance, 10.0);
        assert_eq!(ledger.history.len(), 1);
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let storage = Storage::in_memory();
        let settings = Settings {
            date_format: "%Q broken".into(),
            ..Settings::default()
        };
        let service = StashService::new(&storage, &settings);

        let entry = service.deposit_at(1.0, at(1_792_141_200_000)).unwrap();
        assert_eq!(entry.date, "2026-10-16");
    }
}
