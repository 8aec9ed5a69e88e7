//! Secret stash ledger model
//!
//! Tracks cash put aside at home. The ledger is append-only between wipes:
//! entries are only ever added at the front, and the balance always equals
//! the sum of the entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Identifier of a stash entry
///
/// Derived from the deposit time in milliseconds, bumped past the previous
/// id when two deposits land in the same millisecond, so ids are unique and
/// strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Next id for a deposit made at `now_millis`, given the latest id so far
    pub fn next(now_millis: i64, latest: Option<EntryId>) -> Self {
        match latest {
            Some(EntryId(prev)) if prev >= now_millis => Self(prev + 1),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single cash deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashEntry {
    pub id: EntryId,
    pub amount: Amount,
    /// Calendar date, already formatted for display
    pub date: String,
    pub note: String,
}

/// Observable state of the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    Empty,
    HasEntries,
}

/// Balance plus deposit history, most recent first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StashLedger {
    pub balance: f64,
    pub history: Vec<StashEntry>,
}

impl StashLedger {
    /// An empty ledger
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from its history, deriving the balance
    pub fn from_history(history: Vec<StashEntry>) -> Self {
        let mut ledger = Self {
            balance: 0.0,
            history,
        };
        ledger.balance = ledger.history_total();
        ledger
    }

    pub fn state(&self) -> LedgerState {
        if self.history.is_empty() {
            LedgerState::Empty
        } else {
            LedgerState::HasEntries
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state() == LedgerState::Empty
    }

    /// Most recent entry id, if any
    pub fn latest_id(&self) -> Option<EntryId> {
        self.history.iter().map(|e| e.id).max()
    }

    /// Sum of all entry amounts
    pub fn history_total(&self) -> f64 {
        self.history.iter().map(|e| e.amount.value()).sum()
    }

    /// Prepend an entry and add its amount to the balance
    pub fn record(&mut self, entry: StashEntry) {
        self.balance += entry.amount.value();
        self.history.insert(0, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, amount: f64) -> StashEntry {
        StashEntry {
            id: EntryId::from_millis(id),
            amount: Amount::new("amount", amount).unwrap(),
            date: "1.1.2026".into(),
            note: "Manual deposit".into(),
        }
    }

    #[test]
    fn test_next_id_uses_clock() {
        assert_eq!(EntryId::next(1000, None), EntryId::from_millis(1000));
        assert_eq!(
            EntryId::next(1000, Some(EntryId::from_millis(900))),
            EntryId::from_millis(1000)
        );
    }

    #[test]
    fn test_next_id_bumps_on_collision() {
        assert_eq!(
            EntryId::next(1000, Some(EntryId::from_millis(1000))),
            EntryId::from_millis(1001)
        );
        // Clock went backwards
        assert_eq!(
            EntryId::next(500, Some(EntryId::from_millis(1000))),
            EntryId::from_millis(1001)
        );
    }

    #[test]
    fn test_record_prepends() {
        let mut ledger = StashLedger::empty();
        assert_eq!(ledger.state(), LedgerState::Empty);

        ledger.record(entry(1, 5.0));
        ledger.record(entry(2, 7.5));

        assert_eq!(ledger.state(), LedgerState::HasEntries);
        assert_eq!(ledger.balance, 12.5);
        assert_eq!(ledger.history[0].id, EntryId::from_millis(2));
        assert_eq!(ledger.latest_id(), Some(EntryId::from_millis(2)));
    }

    #[test]
    fn test_from_history_derives_balance() {
        let ledger = StashLedger::from_history(vec![entry(2, 3.0), entry(1, 4.0)]);
        assert_eq!(ledger.balance, 7.0);
        assert_eq!(ledger.history_total(), 7.0);
    }

    #[test]
    fn test_entry_wire_shape() {
        let json = serde_json::to_value(entry(1700000000000, 5.0)).unwrap();
        assert_eq!(json["id"], 1700000000000i64);
        assert_eq!(json["amount"], 5.0);
        assert_eq!(json["date"], "1.1.2026");
        assert_eq!(json["note"], "Manual deposit");
    }
}
