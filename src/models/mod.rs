//! Core data models for Haven
//!
//! Plain data produced by the calculators and stored by the repositories.

pub mod amount;
pub mod budget;
pub mod freedom;
pub mod inputs;
pub mod loan;
pub mod safety;
pub mod stash;

pub use amount::Amount;
pub use budget::{BudgetCategory, BudgetSplit};
pub use freedom::{FreedomFundResult, ProjectionPoint};
pub use inputs::{BudgetInputs, FreedomInputs, LoanInputs, Region};
pub use loan::{LoanResult, ScheduleRow};
pub use safety::{Priority, SafetyItem, SAFETY_ITEMS};
pub use stash::{EntryId, LedgerState, StashEntry, StashLedger};
