//! Loan CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_loan_result, format_loan_schedule};
use crate::error::HavenResult;
use crate::models::LoanInputs;
use crate::services::LoanService;
use crate::storage::Storage;

/// Loan amortizer arguments
///
/// Options that are left out keep their previously entered value.
#[derive(Args)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Yearly interest rate in percent (e.g., "6.5")
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Term in months
    #[arg(short, long, allow_hyphen_values = true)]
    pub term: Option<String>,

    /// Show the month-by-month repayment schedule
    #[arg(short, long)]
    pub schedule: bool,
}

/// Handle the loan command
pub fn handle_loan_command(
    storage: &Storage,
    settings: &Settings,
    args: LoanArgs,
) -> HavenResult<()> {
    let service = LoanService::new(storage);

    let result = if args.amount.is_some() || args.rate.is_some() || args.term.is_some() {
        let stored = service.inputs()?;
        service.submit(LoanInputs {
            amount: args.amount.unwrap_or(stored.amount),
            interest_rate: args.rate.unwrap_or(stored.interest_rate),
            term: args.term.unwrap_or(stored.term),
        })?
    } else {
        match service.current()? {
            Some(result) => result,
            None => {
                println!("No loan entered yet.");
                println!("Run 'haven loan --amount <AMOUNT>' to calculate a monthly payment.");
                return Ok(());
            }
        }
    };

    print!("{}", format_loan_result(&result, &settings.currency_symbol));
    if args.schedule {
        println!();
        print!("{}", format_loan_schedule(&result, &settings.currency_symbol));
    }

    Ok(())
}
