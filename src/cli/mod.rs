//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers return
//! [`HavenResult`](crate::error::HavenResult); a refused input comes back as
//! `HavenError::Rejected` and the binary decides how loudly to report it.

pub mod budget;
pub mod freedom;
pub mod loan;
pub mod log;
pub mod safety;
pub mod stash;

pub use budget::{handle_budget_command, BudgetArgs};
pub use freedom::{handle_freedom_command, FreedomArgs};
pub use loan::{handle_loan_command, LoanArgs};
pub use log::{handle_log_command, LogArgs};
pub use safety::{handle_safety_command, SafetyCommands};
pub use stash::{handle_stash_command, StashCommands};
