//! Multi-year equity projection engine

mod engine;
mod series;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use series::{ProjectionPoint, ProjectionResult, ProjectionSummary};
