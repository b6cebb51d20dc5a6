//! Point-in-time investment metrics for a single property
//!
//! Pure functions of their inputs: no state, no I/O, safe to call from any
//! number of threads. Negative NOI, cap rate, and cash-on-cash are produced
//! as-is; surfacing them as warnings is the caller's business rule, not the
//! calculator's.

use serde::{Deserialize, Serialize};

use crate::assumptions::DEFAULT_DOWN_PAYMENT_FRACTION;
use crate::error::EngineError;
use crate::financials::PropertyFinancials;

/// Derived investment metrics, recomputed on demand and never persisted as
/// authoritative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// Gross annual rental income
    pub annual_rent: f64,
    /// Annual operating expenses
    pub annual_expenses: f64,
    /// Net operating income (annual rent minus annual expenses, before debt
    /// service); may be negative
    pub noi: f64,
    /// NOI as a percentage of purchase price
    pub cap_rate: f64,
    /// Monthly rent minus monthly expenses
    pub monthly_cashflow: f64,
    /// Annualized cashflow
    pub annual_cashflow: f64,
    /// Current value minus purchase price
    pub equity: f64,
    /// Monthly rent as a percentage of purchase price
    pub one_percent_rule: f64,
    /// Annual rent as a percentage of purchase price
    pub gross_yield: f64,
    /// Annual cashflow as a percentage of cash invested
    pub cash_on_cash: f64,
    /// Down payment fraction the cash-on-cash figure assumed
    pub down_payment_fraction: f64,
}

/// Compute all point-in-time metrics for one property
///
/// Price-normalized ratios return 0 when the purchase price is 0: that is an
/// explicit "no data" policy, distinguishing an unpriced record from an
/// error. Negative inputs are rejected before anything is computed.
pub fn compute_metrics(
    financials: &PropertyFinancials,
    down_payment_fraction: f64,
) -> Result<Metrics, EngineError> {
    financials.validate()?;
    if !(0.0..=1.0).contains(&down_payment_fraction) {
        return Err(EngineError::DownPaymentFractionOutOfRange(
            down_payment_fraction,
        ));
    }

    // Defaults resolved once, up front
    let purchase_price = financials.purchase_price;
    let monthly_rent = financials.monthly_rent;
    let monthly_expenses = financials.effective_expenses();
    let current_value = financials.effective_value();

    let annual_rent = monthly_rent * 12.0;
    let annual_expenses = monthly_expenses * 12.0;
    let noi = annual_rent - annual_expenses;
    let monthly_cashflow = monthly_rent - monthly_expenses;
    let annual_cashflow = monthly_cashflow * 12.0;
    let equity = current_value - purchase_price;

    let cap_rate = ratio_of_price(noi, purchase_price);
    let one_percent_rule = ratio_of_price(monthly_rent, purchase_price);
    let gross_yield = ratio_of_price(annual_rent, purchase_price);
    let cash_on_cash = ratio_of_price(annual_cashflow, purchase_price * down_payment_fraction);

    Ok(Metrics {
        annual_rent,
        annual_expenses,
        noi,
        cap_rate,
        monthly_cashflow,
        annual_cashflow,
        equity,
        one_percent_rule,
        gross_yield,
        cash_on_cash,
        down_payment_fraction,
    })
}

/// Compute metrics with the standard down payment assumption
pub fn compute_default_metrics(financials: &PropertyFinancials) -> Result<Metrics, EngineError> {
    compute_metrics(financials, DEFAULT_DOWN_PAYMENT_FRACTION)
}

/// Percentage ratio with the zero-denominator guard
fn ratio_of_price(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}
