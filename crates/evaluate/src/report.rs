//! Evaluation report structures.

use serde::Serialize;

use crate::error::EvaluateError;

/// Actual vs predicted precipitation for one test row, in test order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    /// Observed precipitation (mm).
    pub actual: f64,
    /// Model output (mm). May be negative; consumers must not assume
    /// non-negativity unless they clamp it themselves.
    pub predicted: f64,
    /// Absolute error `|actual - predicted|`.
    pub error: f64,
}

/// Scalar metrics plus per-row diagnostics for one evaluation run.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Mean squared error.
    pub mse: f64,
    /// Coefficient of determination. NaN when the actual values are all
    /// identical (zero total sum of squares).
    pub r2: f64,
    /// One entry per test row, test order preserved.
    pub rows: Vec<PredictionRow>,
}

impl EvaluationReport {
    /// Returns the rows sorted descending by absolute error.
    ///
    /// The sort is stable, so ties keep their original chronological
    /// order.
    pub fn ranked_by_error(&self) -> Vec<PredictionRow> {
        let mut ranked = self.rows.clone();
        ranked.sort_by(|a, b| {
            b.error
                .partial_cmp(&a.error)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Returns the `n` worst forecasts.
    pub fn top_errors(&self, n: usize) -> Vec<PredictionRow> {
        let mut ranked = self.ranked_by_error();
        ranked.truncate(n);
        ranked
    }
}

/// Serialize a report to a JSON string.
pub fn to_json(report: &EvaluationReport) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(report).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}
