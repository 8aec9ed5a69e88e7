//! Stash CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_stash;
use crate::error::HavenResult;
use crate::services::StashService;
use crate::storage::Storage;

/// Stash subcommands
#[derive(Subcommand)]
pub enum StashCommands {
    /// Show the balance and deposit history
    Show,
    /// Record cash put aside
    Add {
        /// Amount (e.g., "20" or "12,50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Erase the balance and every deposit
    Wipe,
}

/// Handle a stash command
pub fn handle_stash_command(
    storage: &Storage,
    settings: &Settings,
    cmd: StashCommands,
) -> HavenResult<()> {
    let service = StashService::new(storage, settings);

    match cmd {
        StashCommands::Show => {
            let ledger = service.load()?;
            print!("{}", format_stash(&ledger, &settings.currency_symbol));
        }
        StashCommands::Add { amount } => {
            let entry = service.deposit_raw(&amount)?;
            let ledger = service.load()?;
            println!(
                "Added {} on {}",
                settings.format_amount(entry.amount.value()),
                entry.date
            );
            println!("Balance: {}", settings.format_amount(ledger.balance));
        }
        StashCommands::Wipe => {
            service.wipe()?;
            println!("Stash wiped.");
        }
    }

    Ok(())
}
