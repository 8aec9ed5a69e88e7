//! Activity log CLI command

use clap::Args;

use crate::error::HavenResult;
use crate::storage::Storage;

/// Activity log arguments
#[derive(Args)]
pub struct LogArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub count: usize,
}

/// Handle the log command
pub fn handle_log_command(storage: &Storage, args: LogArgs) -> HavenResult<()> {
    let Some(logger) = storage.audit() else {
        println!("No activity log is attached.");
        return Ok(());
    };

    let entries = logger.read_recent(args.count)?;
    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
