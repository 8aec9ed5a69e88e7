//! Loan service
//!
//! Fixed-payment (annuity) loan calculation for small consumer loans.

use crate::audit::{AuditEntry, EntityType, Operation};
use crate::error::{HavenResult, Rejection};
use crate::models::amount::{parse_count, parse_number, require_non_negative, require_positive};
use crate::models::{LoanInputs, LoanResult};
use crate::storage::Storage;

/// Compute the monthly payment and totals for an amortizing loan
///
/// Uses `P·r / (1 − (1+r)^−n)`, which equals the usual
/// `P·r·(1+r)^n / ((1+r)^n − 1)` but stays finite for long terms. The
/// denominator goes through `ln_1p`/`exp_m1` so rates too small to change
/// `1 + r` still give a payment; a rate that leaves it at zero falls back
/// to `P / n`, as does a zero rate.
pub fn amortize(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> Result<LoanResult, Rejection> {
    let principal = require_positive("principal", principal)?;
    let annual_rate_percent = require_non_negative("interest rate", annual_rate_percent)?;
    if term_months == 0 {
        return Err(Rejection::NotPositive {
            field: "term",
            value: 0.0,
        });
    }

    let n = f64::from(term_months);
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    // 1 - (1+r)^-n
    let discount = -(-n * monthly_rate.ln_1p()).exp_m1();
    let monthly_payment = if monthly_rate == 0.0 || !(discount.is_finite() && discount > 0.0) {
        principal / n
    } else {
        principal * monthly_rate / discount
    };
    let monthly_payment = require_positive("monthly payment", monthly_payment)?;

    let total_payment = monthly_payment * n;

    Ok(LoanResult {
        principal,
        annual_rate_percent,
        term_months,
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Parse the term in whole months
pub fn parse_term(raw: &str) -> Result<u32, Rejection> {
    let months = parse_count("term", raw)?;
    if months <= 0 {
        return Err(Rejection::NotPositive {
            field: "term",
            value: months as f64,
        });
    }
    u32::try_from(months).map_err(|_| Rejection::OutOfRange {
        field: "term",
        value: months,
        min: 1,
        max: i64::from(u32::MAX),
    })
}

/// Calculate from raw panel inputs
pub fn amortize_inputs(inputs: &LoanInputs) -> Result<LoanResult, Rejection> {
    let principal = parse_number("principal", &inputs.amount)?;
    let rate = parse_number("interest rate", &inputs.interest_rate)?;
    let term = parse_term(&inputs.term)?;
    amortize(principal, rate, term)
}

/// Service for the loan panel
pub struct LoanService<'a> {
    storage: &'a Storage,
}

impl<'a> LoanService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn inputs(&self) -> HavenResult<LoanInputs> {
        self.storage.inputs().load_loan()
    }

    /// Calculate from new inputs, storing them only if accepted
    pub fn submit(&self, inputs: LoanInputs) -> HavenResult<LoanResult> {
        let result = amortize_inputs(&inputs)?;

        let inputs = LoanInputs {
            amount: inputs.amount.trim().to_string(),
            interest_rate: inputs.interest_rate.trim().to_string(),
            term: inputs.term.trim().to_string(),
        };
        if self.inputs()? != inputs {
            self.storage.inputs().save_loan(&inputs)?;
            self.storage.log(
                &AuditEntry::new(Operation::Update, EntityType::LoanInputs, "loan")
                    .with_after(&inputs),
            );
        }

        Ok(result)
    }

    /// Recalculate from the stored inputs, if there is a usable amount
    pub fn current(&self) -> HavenResult<Option<LoanResult>> {
        let inputs = self.inputs()?;
        if inputs.amount.trim().is_empty() {
            return Ok(None);
        }
        Ok(amortize_inputs(&inputs).ok())
    }
}
