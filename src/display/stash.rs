//! Stash ledger display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_money;
use crate::models::StashLedger;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format the balance and deposit history, most recent first
pub fn format_stash(ledger: &StashLedger, symbol: &str) -> String {
    let mut output = format!("Stash balance: {}\n", format_money(symbol, ledger.balance));

    if ledger.is_empty() {
        output.push_str("No deposits yet.\n");
        return output;
    }

    let rows: Vec<EntryRow> = ledger
        .history
        .iter()
        .map(|entry| EntryRow {
            date: entry.date.clone(),
            amount: format!("+{}", format_money(symbol, entry.amount.value())),
            note: entry.note.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output.push_str(&format!("{}\n", table));

    output
}
