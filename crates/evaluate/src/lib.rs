//! Evaluation of precipitation forecasts against observed values.

mod error;
mod report;

pub use error::EvaluateError;
pub use report::{to_json, EvaluationReport, PredictionRow};

/// Evaluates predictions against actual values.
///
/// Both sequences must be equal-length and in test-set order. Computes the
/// mean squared error, the coefficient of determination and one
/// [`PredictionRow`] per sample.
///
/// R-squared is `1 - ss_res / ss_tot` with `ss_tot` taken about the mean
/// of `actual`. A constant-actual test set has `ss_tot = 0`; that is a
/// legitimate degenerate input, reported as NaN rather than an error.
///
/// # Errors
///
/// Returns [`EvaluateError::LengthMismatch`] if the sequences differ in
/// length.
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<EvaluationReport, EvaluateError> {
    if actual.len() != predicted.len() {
        return Err(EvaluateError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }

    let n = actual.len() as f64;
    let rows: Vec<PredictionRow> = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&a, &p)| PredictionRow {
            actual: a,
            predicted: p,
            error: (a - p).abs(),
        })
        .collect();

    let ss_res: f64 = rows.iter().map(|r| (r.actual - r.predicted).powi(2)).sum();
    let mse = ss_res / n;

    let mean_actual: f64 = actual.iter().sum::<f64>() / n;
    let ss_tot: f64 = actual.iter().map(|&a| (a - mean_actual).powi(2)).sum();
    let r2 = if ss_tot == 0.0 {
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(EvaluationReport { mse, r2, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn known_mse() {
        // ((10-12)^2 + (20-18)^2 + (30-32)^2) / 3 = 4
        let report = evaluate(&[10.0, 20.0, 30.0], &[12.0, 18.0, 32.0]).unwrap();
        assert_relative_eq!(report.mse, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn perfect_predictions() {
        let report = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(report.mse, 0.0);
        assert_relative_eq!(report.r2, 1.0);
    }

    #[test]
    fn known_r2() {
        // actual mean = 2, ss_tot = 2, ss_res = 0.5 -> r2 = 0.75
        let report = evaluate(&[1.0, 2.0, 3.0], &[1.5, 2.0, 3.5]).unwrap();
        assert_relative_eq!(report.r2, 0.75, epsilon = 1e-10);
    }

    #[test]
    fn constant_actual_yields_nan_r2() {
        let report = evaluate(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(report.r2.is_nan());
        // The remaining metrics stay well-defined.
        assert_relative_eq!(report.mse, 2.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn rows_preserve_order() {
        let report = evaluate(&[0.0, 4.0], &[1.0, 1.0]).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_relative_eq!(report.rows[0].error, 1.0);
        assert_relative_eq!(report.rows[1].error, 3.0);
    }

    #[test]
    fn length_mismatch_rejected() {
        let result = evaluate(&[1.0, 2.0], &[1.0]);
        assert!(matches!(
            result,
            Err(EvaluateError::LengthMismatch {
                actual: 2,
                predicted: 1,
            })
        ));
    }
}
