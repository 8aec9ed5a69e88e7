//! Freedom-fund estimate model

use serde::{Deserialize, Serialize};

/// What it costs to leave and live independently, against current wage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreedomFundResult {
    /// Rent + living costs + children, per month
    pub monthly_survival_budget: f64,
    /// Rent paid up front plus one-off moving expenses
    pub moving_costs: f64,
    /// Survival budget for the safety period
    pub emergency_fund: f64,
    /// Moving costs plus emergency fund
    pub total_goal: f64,
    /// Whether the wage covers the survival budget
    pub can_afford_monthly: bool,
    /// Survival budget minus wage; negative means a surplus
    pub monthly_gap: f64,
    /// Rent used for the selected region
    pub rent_cost: f64,
}

impl FreedomFundResult {
    /// Money left over each month after the survival budget
    pub fn monthly_surplus(&self) -> f64 {
        (-self.monthly_gap).max(0.0)
    }

    /// Months needed to save the total goal from the surplus alone
    ///
    /// `None` when there is no surplus to save from.
    pub fn months_to_goal(&self) -> Option<u32> {
        let surplus = self.monthly_surplus();
        if surplus <= 0.0 {
            return None;
        }
        let months = (self.total_goal / surplus).ceil();
        if months.is_finite() && months <= f64::from(u32::MAX) {
            Some(months as u32)
        } else {
            None
        }
    }

    /// Cumulative savings per month when the whole surplus is put aside
    ///
    /// Index 0 is the starting point (nothing saved). Values are capped at
    /// the total goal.
    pub fn savings_projection(&self, months: u32) -> Vec<ProjectionPoint> {
        let surplus = self.monthly_surplus();
        (0..=months)
            .map(|month| ProjectionPoint {
                month,
                saved: (surplus * f64::from(month)).min(self.total_goal),
            })
            .collect()
    }
}

/// One month of a savings projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub saved: f64,
}
