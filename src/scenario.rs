//! Scenario runner for batch portfolio analysis
//!
//! Pre-builds assumptions once, then runs metrics and projections for many
//! properties (rayon-parallel) or many what-if configurations against a
//! single property without rebuilding anything in between.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::{ProjectionAssumptions, DEFAULT_DOWN_PAYMENT_FRACTION};
use crate::error::EngineError;
use crate::financials::PropertyFinancials;
use crate::metrics::{compute_metrics, Metrics};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Combined analysis output for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAnalysis {
    pub metrics: Metrics,
    pub projection: ProjectionResult,
}

/// Pre-loaded runner for analyzing properties and sweeping scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for rate in [0.02, 0.03, 0.05] {
///     let config = ProjectionConfig { appreciation_rate: rate, ..Default::default() };
///     let result = runner.analyze(&property, &config)?;
/// }
/// ```
pub struct ScenarioRunner {
    engine: ProjectionEngine,
    down_payment_fraction: f64,
}

impl ScenarioRunner {
    /// Create a runner with default mortgage assumptions and the standard
    /// cash-on-cash down payment fraction
    pub fn new() -> Self {
        Self::with_assumptions(ProjectionAssumptions::default())
    }

    /// Create a runner with explicit mortgage assumptions
    pub fn with_assumptions(assumptions: ProjectionAssumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
            down_payment_fraction: DEFAULT_DOWN_PAYMENT_FRACTION,
        }
    }

    /// Override the down payment fraction used for cash-on-cash metrics
    pub fn with_down_payment_fraction(mut self, fraction: f64) -> Self {
        self.down_payment_fraction = fraction;
        self
    }

    /// Full analysis (metrics + projection) for a single property
    pub fn analyze(
        &self,
        financials: &PropertyFinancials,
        config: &ProjectionConfig,
    ) -> Result<PropertyAnalysis, EngineError> {
        let metrics = compute_metrics(financials, self.down_payment_fraction)?;
        let projection = self.engine.project_property(financials, config)?;
        Ok(PropertyAnalysis {
            metrics,
            projection,
        })
    }

    /// Analyze a whole portfolio in parallel, preserving input order
    ///
    /// Fails on the first invalid record; the engine produces no partial
    /// results.
    pub fn analyze_batch(
        &self,
        properties: &[PropertyFinancials],
        config: &ProjectionConfig,
    ) -> Result<Vec<PropertyAnalysis>, EngineError> {
        log::debug!("analyzing {} properties", properties.len());
        properties
            .par_iter()
            .map(|financials| self.analyze(financials, config))
            .collect()
    }

    /// Run multiple projection scenarios (different configs) for one property
    pub fn run_scenarios(
        &self,
        financials: &PropertyFinancials,
        configs: &[ProjectionConfig],
    ) -> Result<Vec<ProjectionResult>, EngineError> {
        configs
            .iter()
            .map(|config| self.engine.project_property(financials, config))
            .collect()
    }

    /// Projection engine backing this runner
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Vec<PropertyFinancials> {
        vec![
            PropertyFinancials::new(300_000.0, 300_000.0, 2_000.0, Some(700.0)),
            PropertyFinancials::new(450_000.0, 480_000.0, 2_800.0, None),
            PropertyFinancials::new(125_000.0, 0.0, 1_400.0, Some(490.0)),
        ]
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let config = ProjectionConfig::default();
        let results = runner.analyze_batch(&portfolio(), &config).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].metrics.noi, 15_600.0);
        assert_eq!(results[2].projection.points[0].property_value, 125_000.0);
        for analysis in &results {
            assert_eq!(analysis.projection.points.len(), 6);
        }
    }

    #[test]
    fn test_batch_fails_on_invalid_record() {
        let runner = ScenarioRunner::new();
        let mut properties = portfolio();
        properties.push(PropertyFinancials::new(200_000.0, 0.0, -1.0, None));

        let config = ProjectionConfig::default();
        assert!(runner.analyze_batch(&properties, &config).is_err());
    }

    #[test]
    fn test_scenario_sweep() {
        let runner = ScenarioRunner::new();
        let property = &portfolio()[0];

        let configs: Vec<ProjectionConfig> = [0.0, 0.03, 0.06]
            .iter()
            .map(|&rate| ProjectionConfig {
                appreciation_rate: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(property, &configs).unwrap();
        assert_eq!(results.len(), 3);

        // Flat scenario holds value; higher appreciation ends higher
        let finals: Vec<f64> = results
            .iter()
            .map(|r| r.points.last().unwrap().property_value)
            .collect();
        assert_eq!(finals[0], 300_000.0);
        assert!(finals[1] < finals[2]);
    }

    #[test]
    fn test_down_payment_fraction_override() {
        let runner = ScenarioRunner::new().with_down_payment_fraction(0.20);
        let config = ProjectionConfig::default();
        let analysis = runner.analyze(&portfolio()[0], &config).unwrap();

        assert_eq!(analysis.metrics.down_payment_fraction, 0.20);
        // 15600 / (300000 * 0.20) * 100
        assert!((analysis.metrics.cash_on_cash - 26.0).abs() < 1e-10);
    }
}
