//! Business logic layer for Haven
//!
//! Pure calculators (`split`, `estimate`, `amortize`) plus services that
//! tie each panel to its stored inputs and to the activity log.

pub mod budget;
pub mod freedom;
pub mod loan;
pub mod safety;
pub mod stash;

pub use budget::{split, BudgetService};
pub use freedom::{estimate, FreedomService};
pub use loan::{amortize, LoanService};
pub use safety::ChecklistService;
pub use stash::StashService;
