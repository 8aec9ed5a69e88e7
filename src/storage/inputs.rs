//! Panel input repository
//!
//! Raw text typed into the calculators, stored one key per field.

use crate::error::HavenResult;
use crate::models::{BudgetInputs, FreedomInputs, LoanInputs};

use super::keys;
use super::kv::KeyValueStore;

/// Loads and saves the calculators' raw inputs
pub struct InputRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> InputRepository<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    fn text_or(&self, key: &str, default: &str) -> HavenResult<String> {
        Ok(self
            .store
            .get(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    pub fn load_budget(&self) -> HavenResult<BudgetInputs> {
        let defaults = BudgetInputs::default();
        Ok(BudgetInputs {
            income: self.text_or(keys::BUDGET_INCOME, &defaults.income)?,
        })
    }

    pub fn save_budget(&self, inputs: &BudgetInputs) -> HavenResult<()> {
        self.store.set(keys::BUDGET_INCOME, &inputs.income)
    }

    /// The region flag is stored as "true"/"false"; anything else falls
    /// back to the default
    pub fn load_freedom(&self) -> HavenResult<FreedomInputs> {
        let defaults = FreedomInputs::default();
        let is_capital = match self.store.get(keys::FREEDOM_IS_CAPITAL)?.as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => defaults.is_capital,
        };

        Ok(FreedomInputs {
            wage: self.text_or(keys::FREEDOM_WAGE, &defaults.wage)?,
            children: self.text_or(keys::FREEDOM_CHILDREN, &defaults.children)?,
            is_capital,
        })
    }

    pub fn save_freedom(&self, inputs: &FreedomInputs) -> HavenResult<()> {
        let is_capital = if inputs.is_capital { "true" } else { "false" };
        self.store.set_many(&[
            (keys::FREEDOM_WAGE, inputs.wage.as_str()),
            (keys::FREEDOM_CHILDREN, inputs.children.as_str()),
            (keys::FREEDOM_IS_CAPITAL, is_capital),
        ])
    }

    pub fn load_loan(&self) -> HavenResult<LoanInputs> {
        let defaults = LoanInputs::default();
        Ok(LoanInputs {
            amount: self.text_or(keys::LOAN_AMOUNT, &defaults.amount)?,
            interest_rate: self.text_or(keys::LOAN_INTEREST, &defaults.interest_rate)?,
            term: self.text_or(keys::LOAN_TERM, &defaults.term)?,
        })
    }

    pub fn save_loan(&self, inputs: &LoanInputs) -> HavenResult<()> {
        self.store.set_many(&[
            (keys::LOAN_AMOUNT, inputs.amount.as_str()),
            (keys::LOAN_INTEREST, inputs.interest_rate.as_str()),
            (keys::LOAN_TERM, inputs.term.as_str()),
        ])
    }
}
