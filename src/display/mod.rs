//! Display formatting for terminal output
//!
//! Turns calculator results and stored state into text for the CLI.

pub mod budget;
pub mod freedom;
pub mod loan;
pub mod safety;
pub mod stash;

pub use budget::format_budget_split;
pub use freedom::{format_freedom_result, format_savings_projection};
pub use loan::{format_loan_result, format_loan_schedule};
pub use safety::format_checklist;
pub use stash::format_stash;

/// Format an amount with a currency symbol, two decimals and thousands
/// separators, e.g. `€1,234.50`
pub fn format_money(symbol: &str, amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u64;
    let fraction = (cents % 100.0) as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
}
