//! Property Engine - investment metrics and equity projections for rental portfolios
//!
//! This library provides:
//! - Point-in-time investment metrics (NOI, cap rate, cash-on-cash, 1% rule)
//! - Fixed-rate mortgage amortization
//! - Multi-year equity and appreciation projections
//! - Batch portfolio analysis and scenario sweeps
//! - CSV portfolio ingestion

pub mod assumptions;
pub mod error;
pub mod financials;
pub mod metrics;
pub mod mortgage;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::ProjectionAssumptions;
pub use error::EngineError;
pub use financials::PropertyFinancials;
pub use metrics::{compute_default_metrics, compute_metrics, Metrics};
pub use mortgage::{AmortizationRow, MortgageTerms};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionPoint, ProjectionResult};
pub use scenario::{PropertyAnalysis, ScenarioRunner};
