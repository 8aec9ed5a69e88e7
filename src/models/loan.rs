//! Loan amortization model

use serde::{Deserialize, Serialize};

/// Fixed monthly payment and totals for an amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl LoanResult {
    /// Interest rate applied each month
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Month-by-month breakdown of the repayment
    ///
    /// The last row absorbs any floating-point remainder so the remaining
    /// balance ends at exactly zero.
    pub fn schedule(&self) -> Vec<ScheduleRow> {
        let rate = self.monthly_rate();
        let mut remaining = self.principal;
        let mut rows = Vec::with_capacity(self.term_months as usize);

        for month in 1..=self.term_months {
            let interest = remaining * rate;
            let (payment, principal) = if month == self.term_months {
                (remaining + interest, remaining)
            } else {
                (self.monthly_payment, self.monthly_payment - interest)
            };
            remaining = if month == self.term_months {
                0.0
            } else {
                (remaining - principal).max(0.0)
            };

            rows.push(ScheduleRow {
                month,
                payment,
                principal,
                interest,
                remaining,
            });
        }

        rows
    }
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining: f64,
}
