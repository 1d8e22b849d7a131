//! Depth-bounded decision-tree regressor.

use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_regressor::{
    DecisionTreeRegressor, DecisionTreeRegressorParameters,
};
use tracing::info;

use crate::error::ModelError;
use crate::Regressor;

type FittedTree = DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// The default regression model: a decision tree bounded by a maximum
/// depth, with a fixed seed for reproducible tie-breaking.
#[derive(Debug)]
pub struct DecisionTreeModel {
    max_depth: u16,
    seed: u64,
    /// Fitted tree and the column count it was trained on.
    fitted: Option<(FittedTree, usize)>,
    /// Column count of the first fit; later fits must match (reuse guard).
    n_features: Option<usize>,
}

impl DecisionTreeModel {
    /// Default maximum tree depth.
    pub const DEFAULT_MAX_DEPTH: u16 = 5;
    /// Default deterministic seed.
    pub const DEFAULT_SEED: u64 = 42;

    /// Creates a model with the given depth bound and seed.
    pub fn new(max_depth: u16, seed: u64) -> Self {
        Self {
            max_depth,
            seed,
            fitted: None,
            n_features: None,
        }
    }

    /// Returns the depth bound.
    pub fn max_depth(&self) -> u16 {
        self.max_depth
    }

    /// Returns `true` once the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Validates a feature matrix against an expected column count,
    /// returning the (uniform) width.
    fn check_width(features: &[Vec<f64>], expected: Option<usize>) -> Result<usize, ModelError> {
        let width = expected.or_else(|| features.first().map(Vec::len)).unwrap_or(0);
        for row in features {
            if row.len() != width {
                return Err(ModelError::FeatureMismatch {
                    expected: width,
                    got: row.len(),
                });
            }
        }
        Ok(width)
    }

    fn to_matrix(features: &[Vec<f64>]) -> DenseMatrix<f64> {
        let rows: Vec<&[f64]> = features.iter().map(Vec::as_slice).collect();
        DenseMatrix::from_2d_array(&rows)
    }
}

impl Default for DecisionTreeModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH, Self::DEFAULT_SEED)
    }
}

impl Regressor for DecisionTreeModel {
    fn fit(&mut self, features: &[Vec<f64>], target: &[f64]) -> Result<(), ModelError> {
        if features.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        if features.len() != target.len() {
            return Err(ModelError::TargetLength {
                features: features.len(),
                targets: target.len(),
            });
        }
        let width = Self::check_width(features, self.n_features)?;

        let x = Self::to_matrix(features);
        let y = target.to_vec();
        let parameters = DecisionTreeRegressorParameters {
            max_depth: Some(self.max_depth),
            min_samples_leaf: 1,
            min_samples_split: 2,
            seed: Some(self.seed),
        };

        let tree = DecisionTreeRegressor::fit(&x, &y, parameters).map_err(|e| {
            ModelError::Training {
                reason: e.to_string(),
            }
        })?;

        info!(
            n_rows = features.len(),
            n_features = width,
            max_depth = self.max_depth,
            "decision tree fitted"
        );
        self.fitted = Some((tree, width));
        self.n_features = Some(width);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        let (tree, width) = self.fitted.as_ref().ok_or(ModelError::Unfitted)?;
        Self::check_width(features, Some(*width))?;
        if features.is_empty() {
            return Ok(Vec::new());
        }

        let x = Self::to_matrix(features);
        tree.predict(&x).map_err(|e| ModelError::Training {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Two well-separated clusters: a depth-bounded tree recovers the
    /// cluster means exactly.
    fn clustered() -> (Vec<Vec<f64>>, Vec<f64>) {
        let mut features = Vec::new();
        let mut target = Vec::new();
        for i in 0..20 {
            let low = i < 10;
            let x0 = if low { i as f64 } else { 100.0 + i as f64 };
            features.push(vec![x0, (i % 3) as f64]);
            target.push(if low { 1.0 } else { 9.0 });
        }
        (features, target)
    }

    #[test]
    fn fit_and_predict_recover_cluster_means() {
        let (features, target) = clustered();
        let mut model = DecisionTreeModel::default();
        model.fit(&features, &target).unwrap();

        let predictions = model
            .predict(&[vec![3.0, 0.0], vec![150.0, 1.0]])
            .unwrap();
        assert_eq!(predictions.len(), 2);
        assert_relative_eq!(predictions[0], 1.0);
        assert_relative_eq!(predictions[1], 9.0);
    }

    #[test]
    fn identical_inputs_identical_predictions() {
        let (features, target) = clustered();

        let mut a = DecisionTreeModel::default();
        a.fit(&features, &target).unwrap();
        let mut b = DecisionTreeModel::default();
        b.fit(&features, &target).unwrap();

        let probe: Vec<Vec<f64>> = (0..40).map(|i| vec![i as f64 * 3.1, 1.0]).collect();
        assert_eq!(a.predict(&probe).unwrap(), b.predict(&probe).unwrap());
    }

    #[test]
    fn predict_before_fit_is_unfitted() {
        let model = DecisionTreeModel::default();
        let result = model.predict(&[vec![1.0, 2.0]]);
        assert!(matches!(result, Err(ModelError::Unfitted)));
    }

    #[test]
    fn empty_training_set_rejected() {
        let mut model = DecisionTreeModel::default();
        let result = model.fit(&[], &[]);
        assert!(matches!(result, Err(ModelError::EmptyTrainingSet)));
    }

    #[test]
    fn target_length_mismatch_rejected() {
        let (features, mut target) = clustered();
        target.pop();
        let mut model = DecisionTreeModel::default();
        let result = model.fit(&features, &target);
        assert!(matches!(
            result,
            Err(ModelError::TargetLength {
                features: 20,
                targets: 19,
            })
        ));
    }

    #[test]
    fn ragged_rows_rejected() {
        let mut model = DecisionTreeModel::default();
        let result = model.fit(&[vec![1.0, 2.0], vec![3.0]], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ModelError::FeatureMismatch {
                expected: 2,
                got: 1,
            })
        ));
    }

    #[test]
    fn predict_width_drift_rejected() {
        let (features, target) = clustered();
        let mut model = DecisionTreeModel::default();
        model.fit(&features, &target).unwrap();

        let result = model.predict(&[vec![1.0, 2.0, 3.0]]);
        assert!(matches!(
            result,
            Err(ModelError::FeatureMismatch {
                expected: 2,
                got: 3,
            })
        ));
    }

    #[test]
    fn refit_width_drift_rejected() {
        let (features, target) = clustered();
        let mut model = DecisionTreeModel::default();
        model.fit(&features, &target).unwrap();

        let result = model.fit(&[vec![1.0]], &[1.0]);
        assert!(matches!(
            result,
            Err(ModelError::FeatureMismatch {
                expected: 2,
                got: 1,
            })
        ));
    }

    #[test]
    fn predict_empty_input_is_empty() {
        let (features, target) = clustered();
        let mut model = DecisionTreeModel::default();
        model.fit(&features, &target).unwrap();
        assert!(model.predict(&[]).unwrap().is_empty());
    }
}
