//! Budget service
//!
//! Splits monthly income into needs, wants and savings, and keeps the last
//! accepted income so the split can be shown again on the next run.

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::config::policy::BudgetRatios;
use crate::error::{HavenResult, Rejection};
use crate::models::amount::{parse_number, require_positive};
use crate::models::{BudgetInputs, BudgetSplit};
use crate::storage::Storage;

/// Divide `income` according to `ratios`
///
/// Savings takes whatever needs and wants leave over, so the three parts
/// always add back up to the income.
pub fn split(income: f64, ratios: &BudgetRatios) -> Result<BudgetSplit, Rejection> {
    let income = require_positive("income", income)?;

    let needs = income * ratios.needs;
    let wants = income * ratios.wants;
    let savings = income - needs - wants;

    Ok(BudgetSplit {
        needs,
        wants,
        savings,
    })
}

/// Parse raw income text and split it
pub fn split_raw(raw_income: &str, ratios: &BudgetRatios) -> Result<BudgetSplit, Rejection> {
    split(parse_number("income", raw_income)?, ratios)
}

/// Service for the budget panel
pub struct BudgetService<'a> {
    storage: &'a Storage,
    ratios: BudgetRatios,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage, ratios: BudgetRatios) -> Self {
        Self { storage, ratios }
    }

    /// The stored raw input
    pub fn inputs(&self) -> HavenResult<BudgetInputs> {
        self.storage.inputs().load_budget()
    }

    /// Split a newly entered income
    ///
    /// The income is stored only when it is accepted; a rejected value
    /// leaves the stored input, and therefore the shown split, unchanged.
    pub fn submit(&self, raw_income: &str) -> HavenResult<BudgetSplit> {
        let result = split_raw(raw_income, &self.ratios)?;

        let inputs = BudgetInputs {
            income: raw_income.trim().to_string(),
        };
        if self.inputs()? != inputs {
            self.storage.inputs().save_budget(&inputs)?;
            self.storage.log(
                &AuditEntry::new(Operation::Update, EntityType::BudgetInputs, "budget")
                    .with_after(&inputs),
            );
        }

        Ok(result)
    }

    /// Recompute the split from the stored income, if there is a usable one
    pub fn current(&self) -> HavenResult<Option<BudgetSplit>> {
        let inputs = self.inputs()?;
        if inputs.income.trim().is_empty() {
            return Ok(None);
        }
        Ok(split_raw(&inputs.income, &self.ratios).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios() -> BudgetRatios {
        BudgetRatios::default()
    }

    #[test]
    fn test_split_450() {
        let result = split(450.0, &ratios()).unwrap();
        assert_eq!(result.needs, 225.0);
        assert_eq!(result.wants, 135.0);
        assert!((result.savings - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_parts_sum_to_income() {
        for income in [0.01, 1.0, 3.33, 450.0, 1234.56, 99_999.99, 1e9] {
            let result = split(income, &ratios()).unwrap();
            assert!(
                (result.total() - income).abs() <= income * 1e-12,
                "income {} split into {:?}",
                income,
                result
            );
            assert!(result.needs >= 0.0 && result.wants >= 0.0 && result.savings >= 0.0);
        }
    }

    #[test]
    fn test_invalid_income_rejected() {
        assert!(matches!(
            split(-5.0, &ratios()),
            Err(Rejection::NotPositive { .. })
        ));
        assert!(matches!(
            split(0.0, &ratios()),
            Err(Rejection::NotPositive { .. })
        ));
        assert!(matches!(
            split(f64::NAN, &ratios()),
            Err(Rejection::NotFinite { .. })
        ));
        assert!(matches!(
            split_raw("lots", &ratios()),
            Err(Rejection::NotANumber { .. })
        ));
    }

    #[test]
    fn test_custom_ratios() {
        let custom = BudgetRatios {
            needs: 0.6,
            wants: 0.2,
            savings: 0.2,
        };
        let result = split(1000.0, &custom).unwrap();
        assert_eq!(result.needs, 600.0);
        assert_eq!(result.wants, 200.0);
    }

    #[test]
    fn test_submit_persists_accepted_income() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage, ratios());

        assert_eq!(service.current().unwrap(), None);

        let result = service.submit(" 450 ").unwrap();
        assert_eq!(result.needs, 225.0);
        assert_eq!(service.inputs().unwrap().income, "450");
        assert_eq!(service.current().unwrap(), Some(result));
    }

    #[test]
    fn test_submit_succeeds_when_log_is_unwritable() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&log_path).unwrap();
        let storage = Storage::in_memory().with_audit(crate::audit::AuditLogger::new(log_path));
        let service = BudgetService::new(&storage, ratios());

        assert!(service.submit("450").is_ok());
        assert_eq!(service.inputs().unwrap().income, "450");
    }

    #[test]
    fn test_rejected_submit_leaves_state_untouched() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage, ratios());
        let accepted = service.submit("450").unwrap();

        for bad in ["-5", "NaN", "abc", "0"] {
            let err = service.submit(bad).unwrap_err();
            assert!(err.is_rejection(), "{} should be rejected", bad);
        }

        assert_eq!(service.inputs().unwrap().income, "450");
        assert_eq!(service.current().unwrap(), Some(accepted));
    }
}
