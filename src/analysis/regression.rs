use nalgebra::{DMatrix, DVector};

use super::error::RegressionError;
use crate::data::model::{Dataset, FittedModel, FEATURE_COUNT};

/// Singular values below this threshold are treated as zero when inverting.
const SVD_EPSILON: f64 = 1e-10;

// ---------------------------------------------------------------------------
// Ordinary least squares
// ---------------------------------------------------------------------------

/// Fit an ordinary least-squares model predicting production from the four
/// predictor columns, over the complete rows among `indices`.
///
/// The design matrix carries a leading ones column, so the intercept is
/// always fitted. The system is solved through the SVD pseudo-inverse,
/// which is numerically stable for ill-conditioned inputs and — the
/// documented policy for rank-deficient systems (fewer complete rows than
/// five unknowns, or collinear columns) — returns the minimum-norm
/// coefficient vector rather than failing.
///
/// Pure and deterministic: the same rows always produce identical
/// coefficients, intercept and fitted values. Indices that fall outside
/// the dataset are skipped, like incomplete rows.
pub fn fit(dataset: &Dataset, indices: &[usize]) -> Result<FittedModel, RegressionError> {
    let training: Vec<([f64; FEATURE_COUNT], f64)> = indices
        .iter()
        .filter_map(|&i| dataset.rows.get(i)?.complete())
        .collect();
    if training.is_empty() {
        return Err(RegressionError::InsufficientData);
    }

    let n = training.len();
    let mut design = DMatrix::<f64>::zeros(n, FEATURE_COUNT + 1);
    let mut target = DVector::<f64>::zeros(n);
    for (r, (features, y)) in training.iter().enumerate() {
        design[(r, 0)] = 1.0;
        for (c, &x) in features.iter().enumerate() {
            design[(r, c + 1)] = x;
        }
        target[r] = *y;
    }

    let target_mean = target.mean();

    let svd = design.clone().svd(true, true);
    let beta = svd
        .solve(&target, SVD_EPSILON)
        .map_err(RegressionError::SolveFailed)?;

    let fitted = &design * &beta;

    let mut coefficients = [0.0; FEATURE_COUNT];
    for (c, slot) in coefficients.iter_mut().enumerate() {
        *slot = beta[c + 1];
    }

    Ok(FittedModel {
        coefficients,
        intercept: beta[0],
        fitted: fitted.iter().copied().collect(),
        target_mean,
    })
}
