//! Stash ledger repository
//!
//! The ledger lives under two keys: the balance as a decimal string and the
//! history as a JSON array. Both are always written or removed together.

use crate::error::HavenResult;
use crate::models::{StashEntry, StashLedger};

use super::keys;
use super::kv::KeyValueStore;

/// Largest difference tolerated between stored balance and history sum
const BALANCE_TOLERANCE: f64 = 1e-6;

/// Loads, saves and erases the stash ledger
pub struct StashRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> StashRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the ledger, never failing on bad data
    ///
    /// Unparseable history counts as no history. The history is the source
    /// of truth: a stored balance that is missing, unparseable or does not
    /// match the entries is replaced by their sum.
    pub fn load(&self) -> HavenResult<StashLedger> {
        let history: Vec<StashEntry> = self
            .store
            .get(keys::STASH_HISTORY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut ledger = StashLedger::from_history(history);

        let stored_balance = self
            .store
            .get(keys::STASH_BALANCE)?
            .and_then(|raw| raw.trim().parse::<f64>().ok());
        if let Some(balance) = stored_balance {
            if (balance - ledger.balance).abs() <= BALANCE_TOLERANCE {
                ledger.balance = balance;
            }
        }

        Ok(ledger)
    }

    /// Write balance and history in one store update
    pub fn save(&self, ledger: &StashLedger) -> HavenResult<()> {
        let balance = ledger.balance.to_string();
        let history = serde_json::to_string(&ledger.history)?;
        self.store.set_many(&[
            (keys::STASH_BALANCE, balance.as_str()),
            (keys::STASH_HISTORY, history.as_str()),
        ])
    }

    /// Remove every trace of the ledger from the store
    pub fn erase(&self) -> HavenResult<()> {
        self.store
            .remove_many(&[keys::STASH_BALANCE, keys::STASH_HISTORY])
    }
}
