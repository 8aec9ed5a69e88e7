//! Loan display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format_money;
use crate::models::LoanResult;

#[derive(Tabled)]
struct ScheduleDisplayRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format the payment summary of a loan
pub fn format_loan_result(result: &LoanResult, symbol: &str) -> String {
    let money = |v: f64| format_money(symbol, v);
    let mut output = String::new();

    output.push_str(&format!(
        "Loan of {} at {}% over {} months\n",
        money(result.principal),
        result.annual_rate_percent,
        result.term_months
    ));
    output.push_str(&format!("{}\n", "-".repeat(44)));
    output.push_str(&format!("  {:<24} {:>16}\n", "Monthly payment", money(result.monthly_payment)));
    output.push_str(&format!("  {:<24} {:>16}\n", "Total repaid", money(result.total_payment)));
    output.push_str(&format!("  {:<24} {:>16}\n", "Total interest", money(result.total_interest)));

    output
}

/// Format the month-by-month amortization schedule
pub fn format_loan_schedule(result: &LoanResult, symbol: &str) -> String {
    let rows: Vec<ScheduleDisplayRow> = result
        .schedule()
        .into_iter()
        .map(|row| ScheduleDisplayRow {
            month: row.month,
            payment: format_money(symbol, row.payment),
            principal: format_money(symbol, row.principal),
            interest: format_money(symbol, row.interest),
            remaining: format_money(symbol, row.remaining),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    format!("{}\n", table)
}
