//! Budget CLI command
//!
//! `haven budget [INCOME]` splits a monthly income into needs, wants and
//! savings. Without an income it shows the split of the last accepted one.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_budget_split;
use crate::error::HavenResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget splitter arguments
#[derive(Args)]
pub struct BudgetArgs {
    /// Monthly income (e.g., "450" or "450,50")
    #[arg(allow_hyphen_values = true)]
    pub income: Option<String>,
}

/// Handle the budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    args: BudgetArgs,
) -> HavenResult<()> {
    let ratios = settings.policy.budget;
    let service = BudgetService::new(storage, ratios);

    let split = match args.income {
        Some(income) => service.submit(&income)?,
        None => match service.current()? {
            Some(split) => split,
            None => {
                println!("No income entered yet.");
                println!("Run 'haven budget <INCOME>' to split your monthly income.");
                return Ok(());
            }
        },
    };

    print!("{}", format_budget_split(&split, &ratios, &settings.currency_symbol));
    Ok(())
}
