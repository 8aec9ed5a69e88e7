//! Safety checklist CLI commands

use clap::Subcommand;

use crate::display::format_checklist;
use crate::error::HavenResult;
use crate::models::safety::find_item;
use crate::services::ChecklistService;
use crate::storage::Storage;

/// Safety checklist subcommands
#[derive(Subcommand)]
pub enum SafetyCommands {
    /// List the checklist and progress
    List {
        /// Show the risk and steps for each item
        #[arg(short, long)]
        verbose: bool,
    },
    /// Mark an item as done, or as not done if it already is
    Toggle {
        /// Item ID (see 'haven safety list')
        id: String,
    },
    /// Mark every item as not done
    Reset,
}

/// Handle a safety command
pub fn handle_safety_command(storage: &Storage, cmd: SafetyCommands) -> HavenResult<()> {
    let service = ChecklistService::new(storage);

    match cmd {
        SafetyCommands::List { verbose } => {
            let completed = service.completed()?;
            let progress = service.progress()?;
            print!(
                "{}",
                format_checklist(service.items(), &completed, progress, verbose)
            );
        }
        SafetyCommands::Toggle { id } => {
            let done = service.toggle(&id)?;
            let title = find_item(&id).map(|item| item.title).unwrap_or_default();
            let mark = if done { "done" } else { "not done" };
            println!("{}: {}", title, mark);
            println!("Progress: {}%", service.progress()?);
        }
        SafetyCommands::Reset => {
            service.reset()?;
            println!("Checklist reset.");
        }
    }

    Ok(())
}
