//! Property financial inputs matching the portfolio record format

use serde::{Deserialize, Serialize};

use crate::assumptions::DEFAULT_EXPENSE_RATIO;
use crate::error::{require_non_negative, EngineError};

/// Raw financial inputs for a single property
///
/// Fields mirror what the portfolio persistence layer stores. Unknown values
/// arrive as 0 (`current_value`) or absent (`monthly_expenses`); the
/// `effective_*` accessors resolve those defaults exactly once so no caller
/// re-derives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyFinancials {
    /// Purchase price of the property
    pub purchase_price: f64,

    /// Current market value; 0 means unknown
    #[serde(default)]
    pub current_value: f64,

    /// Gross monthly rental income
    #[serde(default)]
    pub monthly_rent: f64,

    /// Monthly operating expenses; `None` means not tracked
    #[serde(default)]
    pub monthly_expenses: Option<f64>,
}

impl PropertyFinancials {
    /// Create financials with all fields explicit
    pub fn new(
        purchase_price: f64,
        current_value: f64,
        monthly_rent: f64,
        monthly_expenses: Option<f64>,
    ) -> Self {
        Self {
            purchase_price,
            current_value,
            monthly_rent,
            monthly_expenses,
        }
    }

    /// Reject negative inputs before any ratio is computed
    pub fn validate(&self) -> Result<(), EngineError> {
        require_non_negative("purchase_price", self.purchase_price)?;
        require_non_negative("current_value", self.current_value)?;
        require_non_negative("monthly_rent", self.monthly_rent)?;
        if let Some(expenses) = self.monthly_expenses {
            require_non_negative("monthly_expenses", expenses)?;
        }
        Ok(())
    }

    /// Market value used in calculations, falling back to purchase price
    /// when the current value is unknown
    pub fn effective_value(&self) -> f64 {
        if self.current_value > 0.0 {
            self.current_value
        } else {
            self.purchase_price
        }
    }

    /// Monthly operating expenses, defaulting to 35% of rent when untracked
    pub fn effective_expenses(&self) -> f64 {
        self.monthly_expenses
            .unwrap_or(self.monthly_rent * DEFAULT_EXPENSE_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_value_fallback() {
        let f = PropertyFinancials::new(300_000.0, 0.0, 2_000.0, Some(700.0));
        assert_eq!(f.effective_value(), 300_000.0);

        let f = PropertyFinancials::new(300_000.0, 325_000.0, 2_000.0, Some(700.0));
        assert_eq!(f.effective_value(), 325_000.0);
    }

    #[test]
    fn test_expense_default_is_35_pct_of_rent() {
        let f = PropertyFinancials::new(300_000.0, 0.0, 2_000.0, None);
        assert!((f.effective_expenses() - 700.0).abs() < 1e-10);

        // Explicit expenses win, including explicit zero
        let f = PropertyFinancials::new(300_000.0, 0.0, 2_000.0, Some(0.0));
        assert_eq!(f.effective_expenses(), 0.0);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let f = PropertyFinancials::new(300_000.0, 0.0, -100.0, None);
        assert_eq!(
            f.validate(),
            Err(EngineError::NegativeInput {
                field: "monthly_rent",
                value: -100.0
            })
        );

        let f = PropertyFinancials::new(-1.0, 0.0, 2_000.0, None);
        assert!(f.validate().is_err());

        let f = PropertyFinancials::new(300_000.0, 0.0, 2_000.0, Some(-50.0));
        assert!(f.validate().is_err());
    }
}
