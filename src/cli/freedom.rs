//! Freedom-fund CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_freedom_result, format_savings_projection};
use crate::error::{HavenResult, Rejection};
use crate::models::amount::parse_number;
use crate::models::{FreedomInputs, Region};
use crate::services::FreedomService;
use crate::storage::Storage;

/// Freedom-fund estimator arguments
///
/// Options that are left out keep their previously entered value.
#[derive(Args)]
pub struct FreedomArgs {
    /// Monthly wage
    #[arg(short, long, allow_hyphen_values = true)]
    pub wage: Option<String>,

    /// Number of children (0-5)
    #[arg(short, long, allow_hyphen_values = true)]
    pub children: Option<String>,

    /// Where you would live (capital, other)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Show a month-by-month savings plan
    #[arg(short, long)]
    pub plan: bool,
}

impl FreedomArgs {
    fn has_inputs(&self) -> bool {
        self.wage.is_some() || self.children.is_some() || self.region.is_some()
    }
}

/// Handle the freedom command
pub fn handle_freedom_command(
    storage: &Storage,
    settings: &Settings,
    args: FreedomArgs,
) -> HavenResult<()> {
    let policy = settings.policy.freedom;
    let service = FreedomService::new(storage, policy);

    let (inputs, result) = if args.has_inputs() {
        let stored = service.inputs()?;
        let is_capital = match &args.region {
            Some(raw) => Region::parse(raw)
                .ok_or_else(|| Rejection::UnknownItem {
                    kind: "region",
                    id: raw.clone(),
                })?
                .is_capital(),
            None => stored.is_capital,
        };
        let inputs = FreedomInputs {
            wage: args.wage.clone().unwrap_or(stored.wage),
            children: args.children.clone().unwrap_or(stored.children),
            is_capital,
        };
        let result = service.submit(inputs.clone())?;
        (inputs, result)
    } else {
        match service.current()? {
            Some(result) => (service.inputs()?, result),
            None => {
                println!("No wage entered yet.");
                println!("Run 'haven freedom --wage <WAGE>' to estimate your freedom fund.");
                return Ok(());
            }
        }
    };

    let wage = parse_number("wage", &inputs.wage)?;
    print!(
        "{}",
        format_freedom_result(
            &result,
            wage,
            Region::from(inputs.is_capital),
            &policy,
            &settings.currency_symbol
        )
    );

    if args.plan {
        println!();
        print!("{}", format_savings_projection(&result, &settings.currency_symbol));
    }

    Ok(())
}
