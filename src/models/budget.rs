//! Budget split model
//!
//! The result of dividing monthly income into needs, wants and savings.

use serde::{Deserialize, Serialize};

/// Income divided across the three budget categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSplit {
    /// Rent, food, bills
    pub needs: f64,
    /// Leisure, clothes, coffee
    pub wants: f64,
    /// Emergency fund
    pub savings: f64,
}

impl BudgetSplit {
    /// Sum of all three categories
    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.savings
    }

    /// Categories in display order with their labels
    pub fn categories(&self) -> [(BudgetCategory, f64); 3] {
        [
            (BudgetCategory::Needs, self.needs),
            (BudgetCategory::Wants, self.wants),
            (BudgetCategory::Savings, self.savings),
        ]
    }
}

/// One of the three budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetCategory {
    Needs,
    Wants,
    Savings,
}

impl BudgetCategory {
    /// Examples of what belongs in the category
    pub fn description(&self) -> &'static str {
        match self {
            Self::Needs => "Rent, food, bills",
            Self::Wants => "Entertainment, coffee, clothes",
            Self::Savings => "Emergency fund",
        }
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Needs => write!(f, "Needs"),
            Self::Wants => write!(f, "Wants"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}
