//! Store keys
//!
//! Each component owns a disjoint set of keys.

pub const BUDGET_INCOME: &str = "haven_budget_income";

pub const FREEDOM_WAGE: &str = "haven_freedom_wage";
pub const FREEDOM_CHILDREN: &str = "haven_freedom_children";
pub const FREEDOM_IS_CAPITAL: &str = "haven_freedom_is_capital";

pub const STASH_BALANCE: &str = "haven_stash_balance";
pub const STASH_HISTORY: &str = "haven_stash_history";

pub const LOAN_AMOUNT: &str = "haven_loan_amount";
pub const LOAN_INTEREST: &str = "haven_loan_interest";
pub const LOAN_TERM: &str = "haven_loan_term";

pub const SAFETY_COMPLETED: &str = "haven_safety_completed";
