//! Shared financial assumptions with named, overridable defaults
//!
//! The dashboard historically re-declared these ratios inline in each
//! component, with values drifting between call sites (20% vs 25% down
//! payment). They are defined once here so every consumer computes from the
//! same numbers.

use serde::{Deserialize, Serialize};

/// Operating expense ratio applied when monthly expenses are not tracked
pub const DEFAULT_EXPENSE_RATIO: f64 = 0.35;

/// Down payment fraction assumed by quick cash-on-cash metrics
pub const DEFAULT_DOWN_PAYMENT_FRACTION: f64 = 0.25;

/// Down payment percentage assumed by the multi-year equity projection
pub const DEFAULT_PROJECTION_DOWN_PAYMENT_PCT: f64 = 20.0;

/// Annual property appreciation rate assumed when the caller supplies none
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.03;

/// Nominal annual mortgage rate assumed by the projection, compounded monthly
pub const DEFAULT_MORTGAGE_RATE: f64 = 0.07;

/// Mortgage term assumed by the projection (30-year fixed)
pub const DEFAULT_MORTGAGE_TERM_MONTHS: u32 = 360;

/// Number of years covered by the standard equity projection
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Mortgage assumptions backing the equity projection
///
/// These are disclosed to end users as fixed assumptions rather than inputs,
/// but they are plain fields so tests and future product surfaces can
/// override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Nominal annual mortgage rate, compounded monthly
    pub mortgage_rate: f64,

    /// Mortgage term in months
    pub mortgage_term_months: u32,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            mortgage_rate: DEFAULT_MORTGAGE_RATE,
            mortgage_term_months: DEFAULT_MORTGAGE_TERM_MONTHS,
        }
    }
}
