//! Year-by-year equity projection combining appreciation and loan paydown

use super::series::{ProjectionPoint, ProjectionResult};
use crate::assumptions::{
    ProjectionAssumptions, DEFAULT_APPRECIATION_RATE, DEFAULT_PROJECTION_DOWN_PAYMENT_PCT,
    DEFAULT_PROJECTION_YEARS,
};
use crate::error::{require_non_negative, EngineError};
use crate::financials::PropertyFinancials;
use crate::mortgage::MortgageTerms;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Down payment as a percentage of purchase price (0..=100)
    pub down_payment_pct: f64,

    /// Annual appreciation rate as a decimal (0.03 = 3%/year)
    pub appreciation_rate: f64,

    /// Number of years to project; output has years + 1 points
    pub years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            down_payment_pct: DEFAULT_PROJECTION_DOWN_PAYMENT_PCT,
            appreciation_rate: DEFAULT_APPRECIATION_RATE,
            years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

impl ProjectionConfig {
    /// Reject configurations no projection can make sense of
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=100.0).contains(&self.down_payment_pct) {
            return Err(EngineError::DownPaymentPctOutOfRange(self.down_payment_pct));
        }
        if self.appreciation_rate <= -1.0 {
            return Err(EngineError::AppreciationRateTooLow(self.appreciation_rate));
        }
        Ok(())
    }
}

/// Equity projection engine
///
/// Holds the mortgage assumptions (rate and term) that back the loan-balance
/// leg; the appreciation side comes from the per-run config. Pure and
/// stateless: identical inputs always produce bit-identical output.
pub struct ProjectionEngine {
    assumptions: ProjectionAssumptions,
}

impl ProjectionEngine {
    /// Create an engine with explicit mortgage assumptions
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self { assumptions }
    }

    /// Project equity over `config.years` years
    ///
    /// A zero `current_value` falls back to `purchase_price`, the same rule
    /// the metrics calculator applies. Points come out in ascending year
    /// order with `equity` recomputed from value and balance at every step.
    pub fn project(
        &self,
        current_value: f64,
        purchase_price: f64,
        config: &ProjectionConfig,
    ) -> Result<ProjectionResult, EngineError> {
        require_non_negative("purchase_price", purchase_price)?;
        require_non_negative("current_value", current_value)?;
        config.validate()?;

        let starting_value = if current_value > 0.0 {
            current_value
        } else {
            purchase_price
        };
        let initial_balance = purchase_price * (1.0 - config.down_payment_pct / 100.0);
        let mortgage = MortgageTerms::new(
            initial_balance,
            self.assumptions.mortgage_rate,
            self.assumptions.mortgage_term_months,
        )?;

        let mut result = ProjectionResult::new();
        for year in 0..=config.years {
            let property_value =
                starting_value * (1.0 + config.appreciation_rate).powi(year as i32);
            let loan_balance = mortgage.balance_after(year * 12);
            result.add_point(ProjectionPoint {
                year,
                property_value,
                loan_balance,
                equity: property_value - loan_balance,
            });
        }

        Ok(result)
    }

    /// Project a property record, resolving its value default first
    pub fn project_property(
        &self,
        financials: &PropertyFinancials,
        config: &ProjectionConfig,
    ) -> Result<ProjectionResult, EngineError> {
        financials.validate()?;
        self.project(
            financials.effective_value(),
            financials.purchase_price,
            config,
        )
    }

    /// Mortgage assumptions this engine projects with
    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.assumptions
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionAssumptions::default())
    }
}
