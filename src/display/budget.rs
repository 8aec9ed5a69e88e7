//! Budget split display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_money;
use crate::config::policy::BudgetRatios;
use crate::models::{BudgetCategory, BudgetSplit};

#[derive(Tabled)]
struct SplitRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "For")]
    description: &'static str,
}

fn ratio_for(category: BudgetCategory, ratios: &BudgetRatios) -> f64 {
    match category {
        BudgetCategory::Needs => ratios.needs,
        BudgetCategory::Wants => ratios.wants,
        BudgetCategory::Savings => ratios.savings,
    }
}

/// Format a budget split as a table
pub fn format_budget_split(split: &BudgetSplit, ratios: &BudgetRatios, symbol: &str) -> String {
    let rows: Vec<SplitRow> = split
        .categories()
        .iter()
        .map(|(category, amount)| SplitRow {
            category: format!(
                "{} ({:.0}%)",
                category,
                ratio_for(*category, ratios) * 100.0
            ),
            amount: format_money(symbol, *amount),
            description: category.description(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "Monthly income: {}\n{}\n",
        format_money(symbol, split.total()),
        table
    )
}
