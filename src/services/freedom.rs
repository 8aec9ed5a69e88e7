//! Freedom-fund service
//!
//! Estimates what it costs to move out and live alone, and whether the
//! current wage covers it.

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::config::policy::FreedomPolicy;
use crate::error::{HavenResult, Rejection};
use crate::models::amount::{parse_number, require_positive};
use crate::models::{FreedomFundResult, FreedomInputs};
use crate::storage::Storage;

/// Estimate the freedom fund for a wage, household and region
pub fn estimate(
    wage: f64,
    children: u32,
    is_capital_region: bool,
    policy: &FreedomPolicy,
) -> Result<FreedomFundResult, Rejection> {
    let wage = require_positive("wage", wage)?;
    if children > policy.max_children {
        return Err(Rejection::OutOfRange {
            field: "children",
            value: i64::from(children),
            min: 0,
            max: i64::from(policy.max_children),
        });
    }

    let rent_cost = policy.rent_for(is_capital_region);
    let monthly_survival_budget =
        rent_cost + policy.adult_living_cost + f64::from(children) * policy.child_cost;
    let moving_costs = rent_cost * f64::from(policy.moving_rent_months) + policy.moving_extra;
    let emergency_fund = monthly_survival_budget * f64::from(policy.safety_months);

    Ok(FreedomFundResult {
        monthly_survival_budget,
        moving_costs,
        emergency_fund,
        total_goal: moving_costs + emergency_fund,
        can_afford_monthly: wage >= monthly_survival_budget,
        monthly_gap: monthly_survival_budget - wage,
        rent_cost,
    })
}

/// Parse the children count, treating unreadable text as zero
pub fn parse_children(raw: &str, policy: &FreedomPolicy) -> Result<u32, Rejection> {
    let Ok(count) = raw.trim().parse::<i64>() else {
        return Ok(0);
    };

    u32::try_from(count)
        .ok()
        .filter(|c| *c <= policy.max_children)
        .ok_or(Rejection::OutOfRange {
            field: "children",
            value: count,
            min: 0,
            max: i64::from(policy.max_children),
        })
}

/// Estimate from raw panel inputs
pub fn estimate_inputs(
    inputs: &FreedomInputs,
    policy: &FreedomPolicy,
) -> Result<FreedomFundResult, Rejection> {
    let wage = parse_number("wage", &inputs.wage)?;
    let children = parse_children(&inputs.children, policy)?;
    estimate(wage, children, inputs.is_capital, policy)
}

/// Service for the freedom-fund panel
pub struct FreedomService<'a> {
    storage: &'a Storage,
    policy: FreedomPolicy,
}

impl<'a> FreedomService<'a> {
    pub fn new(storage: &'a Storage, policy: FreedomPolicy) -> Self {
        Self { storage, policy }
    }

    pub fn inputs(&self) -> HavenResult<FreedomInputs> {
        self.storage.inputs().load_freedom()
    }

    /// Estimate from new inputs, storing them only if accepted
    pub fn submit(&self, inputs: FreedomInputs) -> HavenResult<FreedomFundResult> {
        let result = estimate_inputs(&inputs, &self.policy)?;

        let inputs = FreedomInputs {
            wage: inputs.wage.trim().to_string(),
            children: inputs.children.trim().to_string(),
            is_capital: inputs.is_capital,
        };
        if self.inputs()? != inputs {
            self.storage.inputs().save_freedom(&inputs)?;
            self.storage.log(
                &AuditEntry::new(Operation::Update, EntityType::FreedomInputs, "freedom")
                    .with_after(&inputs),
            );
        }

        Ok(result)
    }

    /// Re-run the estimate on the stored inputs, if they are usable
    pub fn current(&self) -> HavenResult<Option<FreedomFundResult>> {
        let inputs = self.inputs()?;
        if inputs.wage.trim().is_empty() {
            return Ok(None);
        }
        Ok(estimate_inputs(&inputs, &self.policy).ok())
    }
}
