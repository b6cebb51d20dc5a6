//! Input validation errors raised at the engine boundary

use thiserror::Error;

/// Errors raised before any computation runs
///
/// Every calculation either fully succeeds or fails here; there are no
/// partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A required numeric input was negative
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: f64 },

    /// Mortgage term of zero months
    #[error("term_months must be greater than 0")]
    ZeroTerm,

    /// Down payment fraction outside [0, 1]
    #[error("down payment fraction must be within [0, 1], got {0}")]
    DownPaymentFractionOutOfRange(f64),

    /// Down payment percentage outside [0, 100]
    #[error("down payment percentage must be within [0, 100], got {0}")]
    DownPaymentPctOutOfRange(f64),

    /// Appreciation rate at or below -100% per year
    #[error("appreciation rate must be greater than -1.0, got {0}")]
    AppreciationRateTooLow(f64),
}

/// Check a single non-negative input field
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value < 0.0 {
        Err(EngineError::NegativeInput { field, value })
    } else {
        Ok(())
    }
}
