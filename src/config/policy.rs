//! Calculation policy
//!
//! The ratios and cost figures used by the calculators. Defaults reproduce
//! the figures the freedom-fund and budget tools have always used; they are
//! stored in the settings file so they can be tuned per region.

use serde::{Deserialize, Serialize};

use crate::error::HavenError;

/// Share of income assigned to each budget category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRatios {
    #[serde(default = "default_needs")]
    pub needs: f64,
    #[serde(default = "default_wants")]
    pub wants: f64,
    #[serde(default = "default_savings")]
    pub savings: f64,
}

fn default_needs() -> f64 {
    0.5
}

fn default_wants() -> f64 {
    0.3
}

fn default_savings() -> f64 {
    0.2
}

impl Default for BudgetRatios {
    fn default() -> Self {
        Self {
            needs: default_needs(),
            wants: default_wants(),
            savings: default_savings(),
        }
    }
}

impl BudgetRatios {
    /// Ratios must be non-negative and add up to one
    pub fn validate(&self) -> Result<(), HavenError> {
        let parts = [self.needs, self.wants, self.savings];
        if parts.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(HavenError::Config(
                "Budget ratios must be non-negative numbers".into(),
            ));
        }

        let total: f64 = parts.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(HavenError::Config(format!(
                "Budget ratios must add up to 1.0 (got {})",
                total
            )));
        }

        Ok(())
    }
}

/// Cost model behind the freedom-fund estimate
///
/// All figures are monthly amounts in the configured currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreedomPolicy {
    /// Rent for a small flat in the capital
    #[serde(default = "default_capital_rent")]
    pub capital_rent: f64,

    /// Rent for a small flat anywhere else
    #[serde(default = "default_regional_rent")]
    pub regional_rent: f64,

    /// Food, utilities and transport for one adult
    #[serde(default = "default_adult_living_cost")]
    pub adult_living_cost: f64,

    /// Additional monthly cost per child
    #[serde(default = "default_child_cost")]
    pub child_cost: f64,

    /// Rent months paid up front when moving (deposit + first month)
    #[serde(default = "default_moving_rent_months")]
    pub moving_rent_months: u32,

    /// One-off moving expenses on top of the rent paid up front
    #[serde(default = "default_moving_extra")]
    pub moving_extra: f64,

    /// Months of living costs the emergency fund should cover
    #[serde(default = "default_safety_months")]
    pub safety_months: u32,

    /// Largest number of children the estimate accepts
    #[serde(default = "default_max_children")]
    pub max_children: u32,
}

fn default_capital_rent() -> f64 {
    280.0
}

fn default_regional_rent() -> f64 {
    160.0
}

fn default_adult_living_cost() -> f64 {
    220.0
}

fn default_child_cost() -> f64 {
    100.0
}

fn default_moving_rent_months() -> u32 {
    2
}

fn default_moving_extra() -> f64 {
    100.0
}

fn default_safety_months() -> u32 {
    6
}

fn default_max_children() -> u32 {
    5
}

impl Default for FreedomPolicy {
    fn default() -> Self {
        Self {
            capital_rent: default_capital_rent(),
            regional_rent: default_regional_rent(),
            adult_living_cost: default_adult_living_cost(),
            child_cost: default_child_cost(),
            moving_rent_months: default_moving_rent_months(),
            moving_extra: default_moving_extra(),
            safety_months: default_safety_months(),
            max_children: default_max_children(),
        }
    }
}

impl FreedomPolicy {
    /// Cost figures must be finite and non-negative
    pub fn validate(&self) -> Result<(), HavenError> {
        let figures = [
            ("capital_rent", self.capital_rent),
            ("regional_rent", self.regional_rent),
            ("adult_living_cost", self.adult_living_cost),
            ("child_cost", self.child_cost),
            ("moving_extra", self.moving_extra),
        ];
        for (name, value) in figures {
            if !value.is_finite() || value < 0.0 {
                return Err(HavenError::Config(format!(
                    "Freedom policy {} must be a non-negative number (got {})",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Monthly rent for the selected region tier
    pub fn rent_for(&self, is_capital_region: bool) -> f64 {
        if is_capital_region {
            self.capital_rent
        } else {
            self.regional_rent
        }
    }
}

/// All policy values, as stored in the settings file
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub budget: BudgetRatios,
    #[serde(default)]
    pub freedom: FreedomPolicy,
}

impl Policy {
    pub fn validate(&self) -> Result<(), HavenError> {
        self.budget.validate()?;
        self.freedom.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratios_are_valid() {
        let ratios = BudgetRatios::default();
        assert!(ratios.validate().is_ok());
        assert_eq!(ratios.needs, 0.5);
        assert_eq!(ratios.wants, 0.3);
        assert_eq!(ratios.savings, 0.2);
    }

    #[test]
    fn test_ratios_must_sum_to_one() {
        let ratios = BudgetRatios {
            needs: 0.6,
            wants: 0.3,
            savings: 0.2,
        };
        assert!(ratios.validate().is_err());
    }

    #[test]
    fn test_negative_ratio_rejected() {
        let ratios = BudgetRatios {
            needs: 1.2,
            wants: -0.4,
            savings: 0.2,
        };
        assert!(ratios.validate().is_err());
    }

    #[test]
    fn test_rent_tiers() {
        let policy = FreedomPolicy::default();
        assert_eq!(policy.rent_for(true), 280.0);
        assert_eq!(policy.rent_for(false), 160.0);
    }

    #[test]
    fn test_freedom_figures_validated() {
        assert!(Policy::default().validate().is_ok());

        let negative = FreedomPolicy {
            child_cost: -100.0,
            ..FreedomPolicy::default()
        };
        assert!(negative.validate().is_err());

        let policy = Policy {
            freedom: FreedomPolicy {
                capital_rent: f64::NAN,
                ..FreedomPolicy::default()
            },
            ..Policy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_partial_policy_uses_defaults() {
        let policy: Policy =
            serde_json::from_str(r#"{"freedom": {"capital_rent": 300}}"#).unwrap();
        assert_eq!(policy.freedom.capital_rent, 300.0);
        assert_eq!(policy.freedom.regional_rent, 160.0);
        assert_eq!(policy.budget, BudgetRatios::default());
    }
}
