//! Output structures for equity projections

use serde::{Deserialize, Serialize};

/// One projected year of property value, loan balance, and equity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years elapsed since purchase (0 = today)
    pub year: u32,

    /// Projected property value at that year
    pub property_value: f64,

    /// Remaining mortgage principal at that year's end
    pub loan_balance: f64,

    /// property_value - loan_balance, always recomputed from the other two
    pub equity: f64,
}

/// Complete equity projection for one property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly points in ascending year order, length years + 1
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Add a projection point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Derive the whole-series summary figures
    pub fn summary(&self) -> ProjectionSummary {
        let first = self.points.first();
        let last = self.points.last();

        let initial_value = first.map(|p| p.property_value).unwrap_or(0.0);
        let final_value = last.map(|p| p.property_value).unwrap_or(0.0);

        ProjectionSummary {
            years: last.map(|p| p.year).unwrap_or(0),
            initial_equity: first.map(|p| p.equity).unwrap_or(0.0),
            final_equity: last.map(|p| p.equity).unwrap_or(0.0),
            total_appreciation: final_value - initial_value,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary figures derived once over a projection series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub initial_equity: f64,
    pub final_equity: f64,
    pub total_appreciation: f64,
}
