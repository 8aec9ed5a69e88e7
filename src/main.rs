use anyhow::Result;
use clap::{Parser, Subcommand};

use haven_cli::cli::{
    handle_budget_command, handle_freedom_command, handle_loan_command, handle_log_command,
    handle_safety_command, handle_stash_command,
};
use haven_cli::config::{paths::HavenPaths, settings::Settings};
use haven_cli::storage::Storage;
use haven_cli::HavenResult;

#[derive(Parser)]
#[command(
    name = "haven",
    version,
    about = "Private financial-safety toolkit",
    long_about = "Haven helps plan a safe exit from financial abuse: split a monthly \
                  income, estimate the money needed to live independently, check the \
                  cost of a loan, keep a private record of hidden cash and work through \
                  a phone safety checklist. Everything stays on this machine."
)]
struct Cli {
    /// Print why an input was refused instead of ignoring it
    #[arg(long, global = true)]
    explain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a monthly income into needs, wants and savings
    Budget(haven_cli::cli::BudgetArgs),

    /// Estimate the fund needed to leave and live independently
    Freedom(haven_cli::cli::FreedomArgs),

    /// Calculate the monthly payment and cost of a loan
    Loan(haven_cli::cli::LoanArgs),

    /// Secret stash of hidden cash
    #[command(subcommand)]
    Stash(haven_cli::cli::StashCommands),

    /// Phone safety checklist
    #[command(subcommand)]
    Safety(haven_cli::cli::SafetyCommands),

    /// Show recent activity
    Log(haven_cli::cli::LogArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = HavenPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match run(cli.command, &paths, &settings) {
        Ok(()) => Ok(()),
        // Refused input is a silent no-op unless asked for
        Err(err) => match err.as_rejection() {
            Some(reason) => {
                if cli.explain {
                    eprintln!("{}", reason);
                }
                Ok(())
            }
            None => Err(err.into()),
        },
    }
}

fn run(command: Option<Commands>, paths: &HavenPaths, settings: &Settings) -> HavenResult<()> {
    let Some(command) = command else {
        println!("Haven - private financial-safety toolkit");
        println!();
        println!("Run 'haven --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing Haven at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            return Ok(());
        }
        Commands::Config => {
            println!("Haven Configuration");
            println!("===================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Store file:      {}", paths.store_file().display());
            println!("Activity log:    {}", paths.audit_log().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency:      {}", settings.currency_symbol);
            println!("  Date format:   {}", settings.date_format);
            let ratios = &settings.policy.budget;
            println!(
                "  Budget split:  {:.0}/{:.0}/{:.0}",
                ratios.needs * 100.0,
                ratios.wants * 100.0,
                ratios.savings * 100.0
            );
            let freedom = &settings.policy.freedom;
            println!(
                "  Rent:          {} capital, {} other",
                settings.format_amount(freedom.capital_rent),
                settings.format_amount(freedom.regional_rent)
            );
            return Ok(());
        }
        _ => {}
    }

    let storage = Storage::open(paths)?;

    match command {
        Commands::Budget(args) => handle_budget_command(&storage, settings, args),
        Commands::Freedom(args) => handle_freedom_command(&storage, settings, args),
        Commands::Loan(args) => handle_loan_command(&storage, settings, args),
        Commands::Stash(cmd) => handle_stash_command(&storage, settings, cmd),
        Commands::Safety(cmd) => handle_safety_command(&storage, cmd),
        Commands::Log(args) => handle_log_command(&storage, args),
        Commands::Init | Commands::Config => Ok(()),
    }
}
