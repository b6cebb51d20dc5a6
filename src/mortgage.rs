//! Fixed-rate mortgage amortization
//!
//! Standard closed-form amortization for a fixed-rate, fixed-term loan:
//! payment `M = P*r*(1+r)^n / ((1+r)^n - 1)` with `r = annual_rate/12` and
//! `n = term_months`. The zero-rate case short-circuits to straight-line
//! paydown because the closed form divides by zero at r = 0.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, EngineError};

/// Terms of a fixed-rate, fixed-term mortgage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Loan principal; 0 models an all-cash purchase
    pub principal: f64,

    /// Nominal annual rate, compounded monthly
    pub annual_rate: f64,

    /// Term in months
    pub term_months: u32,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number, 1-indexed
    pub month: u32,
    /// Total payment for the month
    pub payment: f64,
    /// Interest portion of the payment
    pub interest: f64,
    /// Principal portion of the payment
    pub principal_paid: f64,
    /// Remaining balance after the payment
    pub balance: f64,
}

impl MortgageTerms {
    /// Create terms, rejecting negative principal/rate and a zero-month term
    pub fn new(principal: f64, annual_rate: f64, term_months: u32) -> Result<Self, EngineError> {
        require_non_negative("principal", principal)?;
        require_non_negative("annual_rate", annual_rate)?;
        if term_months == 0 {
            return Err(EngineError::ZeroTerm);
        }
        Ok(Self {
            principal,
            annual_rate,
            term_months,
        })
    }

    /// Monthly rate used by the closed-form formulas
    fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Fixed monthly payment over the life of the loan
    pub fn monthly_payment(&self) -> f64 {
        let n = self.term_months as f64;
        let r = self.monthly_rate();
        if r == 0.0 {
            return self.principal / n;
        }
        let growth = (1.0 + r).powf(n);
        self.principal * r * growth / (growth - 1.0)
    }

    /// Remaining principal after `months_elapsed` payments
    ///
    /// Returns exactly 0 at and beyond the end of the term; balances are
    /// clamped so floating-point drift never produces a negative residual.
    pub fn balance_after(&self, months_elapsed: u32) -> f64 {
        if months_elapsed >= self.term_months {
            return 0.0;
        }
        let n = self.term_months as f64;
        let m = months_elapsed as f64;
        let r = self.monthly_rate();
        if r == 0.0 {
            // Straight-line paydown
            return (self.principal * (1.0 - m / n)).max(0.0);
        }
        let growth_n = (1.0 + r).powf(n);
        let growth_m = (1.0 + r).powf(m);
        (self.principal * (growth_n - growth_m) / (growth_n - 1.0)).max(0.0)
    }

    /// Total interest paid over the full term
    pub fn total_interest(&self) -> f64 {
        (self.monthly_payment() * self.term_months as f64 - self.principal).max(0.0)
    }

    /// Month-by-month schedule splitting each payment into interest and
    /// principal, with the final payment absorbing the rounding residual so
    /// the schedule ends at exactly 0
    pub fn amortization_schedule(&self) -> Vec<AmortizationRow> {
        let payment = self.monthly_payment();
        let r = self.monthly_rate();
        let mut rows = Vec::with_capacity(self.term_months as usize);
        let mut balance = self.principal;

        for month in 1..=self.term_months {
            let interest = balance * r;
            let principal_paid = if month == self.term_months {
                balance
            } else {
                payment - interest
            };
            balance = (balance - principal_paid).max(0.0);
            rows.push(AmortizationRow {
                month,
                payment: interest + principal_paid,
                interest,
                principal_paid,
                balance,
            });
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_payment() {
        // 240k at 7% over 30 years
        let terms = MortgageTerms::new(240_000.0, 0.07, 360).unwrap();
        assert_abs_diff_eq!(terms.monthly_payment(), 1596.73, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_payment_is_straight_line() {
        let terms = MortgageTerms::new(1200.0, 0.0, 12).unwrap();
        assert_eq!(terms.monthly_payment(), 100.0);
        assert_eq!(terms.balance_after(6), 600.0);
        assert_eq!(terms.total_interest(), 0.0);
    }

    #[test]
    fn test_balance_at_term_end_is_exactly_zero() {
        let terms = MortgageTerms::new(240_000.0, 0.07, 360).unwrap();
        assert_eq!(terms.balance_after(360), 0.0);
        assert_eq!(terms.balance_after(720), 0.0);

        let terms = MortgageTerms::new(50_000.0, 0.0, 120).unwrap();
        assert_eq!(terms.balance_after(120), 0.0);
    }

    #[test]
    fn test_balance_monotonically_non_increasing() {
        let terms = MortgageTerms::new(240_000.0, 0.07, 360).unwrap();
        let mut prev = terms.principal;
        for month in 0..=360 {
            let balance = terms.balance_after(month);
            assert!(balance <= prev + 1e-9, "balance rose at month {}", month);
            assert!(balance >= 0.0);
            prev = balance;
        }
    }

    #[test]
    fn test_zero_principal_amortizes_flat() {
        let terms = MortgageTerms::new(0.0, 0.07, 360).unwrap();
        assert_eq!(terms.monthly_payment(), 0.0);
        assert_eq!(terms.balance_after(180), 0.0);
    }

    #[test]
    fn test_schedule_reconciles_with_closed_form() {
        let terms = MortgageTerms::new(240_000.0, 0.07, 360).unwrap();
        let schedule = terms.amortization_schedule();
        assert_eq!(schedule.len(), 360);

        // Closed-form balance matches the iterated schedule
        for row in schedule.iter().step_by(37) {
            assert_abs_diff_eq!(
                row.balance,
                terms.balance_after(row.month),
                epsilon = 1e-4
            );
        }

        let last = schedule.last().unwrap();
        assert_eq!(last.balance, 0.0);

        let total_interest: f64 = schedule.iter().map(|r| r.interest).sum();
        assert_abs_diff_eq!(total_interest, terms.total_interest(), epsilon = 0.01);
    }

    #[test]
    fn test_invalid_terms_rejected() {
        assert!(MortgageTerms::new(-1.0, 0.07, 360).is_err());
        assert!(MortgageTerms::new(240_000.0, -0.01, 360).is_err());
        assert_eq!(
            MortgageTerms::new(240_000.0, 0.07, 0),
            Err(EngineError::ZeroTerm)
        );
    }
}
