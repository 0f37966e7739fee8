use crate::data::model::{FittedModel, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// Applying a fitted model to a single new input
// ---------------------------------------------------------------------------

/// Qualitative position of a prediction relative to the training mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionOutlook {
    AboveAverage,
    BelowAverage,
}

/// Apply the model to one feature vector (in [`crate::data::model::Feature::ALL`]
/// order): intercept + coefficients · input.
///
/// Deliberately no clamping and no range checks: extrapolating far outside
/// the training data is allowed, the caller only gets the qualitative
/// outlook from [`predict_with_outlook`] as a hint.
pub fn predict(model: &FittedModel, input: &[f64; FEATURE_COUNT]) -> f64 {
    let weighted: f64 = model
        .coefficients
        .iter()
        .zip(input.iter())
        .map(|(c, x)| c * x)
        .sum();
    model.intercept + weighted
}

/// Predict and classify against the training target mean. Strictly greater
/// than the mean counts as above average; an exact tie is below.
pub fn predict_with_outlook(
    model: &FittedModel,
    input: &[f64; FEATURE_COUNT],
) -> (f64, ProductionOutlook) {
    let value = predict(model, input);
    let outlook = if value > model.target_mean {
        ProductionOutlook::AboveAverage
    } else {
        ProductionOutlook::BelowAverage
    };
    (value, outlook)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(intercept: f64, coefficients: [f64; 4], target_mean: f64) -> FittedModel {
        FittedModel {
            coefficients,
            intercept,
            fitted: Vec::new(),
            target_mean,
        }
    }

    #[test]
    fn zero_input_returns_the_intercept() {
        let m = model(42.5, [1.0, 2.0, 3.0, 4.0], 0.0);
        assert_eq!(predict(&m, &[0.0, 0.0, 0.0, 0.0]), 42.5);
    }

    #[test]
    fn single_active_coefficient() {
        let m = model(5.0, [1.0, 0.0, 0.0, 0.0], 0.0);
        assert_eq!(predict(&m, &[10.0, 0.0, 0.0, 0.0]), 15.0);
    }

    #[test]
    fn full_dot_product() {
        let m = model(1.0, [2.0, -1.0, 0.5, 3.0], 0.0);
        let value = predict(&m, &[1.0, 2.0, 4.0, 1.0]);
        // 1 + 2 - 2 + 2 + 3
        assert!((value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn outlook_compares_against_training_mean() {
        let m = model(0.0, [1.0, 0.0, 0.0, 0.0], 100.0);
        let (above, outlook) = predict_with_outlook(&m, &[150.0, 0.0, 0.0, 0.0]);
        assert_eq!(above, 150.0);
        assert_eq!(outlook, ProductionOutlook::AboveAverage);

        let (_, outlook) = predict_with_outlook(&m, &[50.0, 0.0, 0.0, 0.0]);
        assert_eq!(outlook, ProductionOutlook::BelowAverage);
    }

    #[test]
    fn exact_tie_counts_as_below_average() {
        let m = model(0.0, [1.0, 0.0, 0.0, 0.0], 100.0);
        let (_, outlook) = predict_with_outlook(&m, &[100.0, 0.0, 0.0, 0.0]);
        assert_eq!(outlook, ProductionOutlook::BelowAverage);
    }
}
