//! Raw panel inputs
//!
//! What the user last typed into each calculator, kept as text so it can be
//! shown back exactly as entered.

use serde::{Deserialize, Serialize};

/// Budget splitter input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub income: String,
}

/// Freedom-fund estimator inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreedomInputs {
    pub wage: String,
    pub children: String,
    pub is_capital: bool,
}

impl Default for FreedomInputs {
    fn default() -> Self {
        Self {
            wage: String::new(),
            children: "0".to_string(),
            is_capital: true,
        }
    }
}

/// Loan amortizer inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInputs {
    pub amount: String,
    pub interest_rate: String,
    pub term: String,
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            amount: String::new(),
            interest_rate: "6.5".to_string(),
            term: "36".to_string(),
        }
    }
}

/// Region tier used by the freedom-fund estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Capital,
    Other,
}

impl Region {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "capital" | "city" | "prishtina" | "tirana" => Some(Self::Capital),
            "other" | "regional" | "town" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn is_capital(&self) -> bool {
        matches!(self, Self::Capital)
    }
}

impl From<bool> for Region {
    fn from(is_capital: bool) -> Self {
        if is_capital {
            Self::Capital
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capital => write!(f, "Capital"),
            Self::Other => write!(f, "Other city"),
        }
    }
}
