use super::error::EmptySeriesError;

// ---------------------------------------------------------------------------
// Goodness-of-fit metrics
// ---------------------------------------------------------------------------

fn check_series(actual: &[f64], predicted: &[f64]) -> Result<(), EmptySeriesError> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(EmptySeriesError::Empty);
    }
    if actual.len() != predicted.len() {
        return Err(EmptySeriesError::LengthMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }
    Ok(())
}

/// Coefficient of determination: 1 − RSS / TSS, with the sample mean of
/// `actual` as the baseline.
///
/// When `actual` has zero variance the formula divides by zero; the
/// documented fallback is `1.0` if the residuals are also all zero (the
/// constant was predicted perfectly) and `NaN` otherwise.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Result<f64, EmptySeriesError> {
    check_series(actual, predicted)?;

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let rss: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let tss: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();

    if tss == 0.0 {
        return Ok(if rss == 0.0 { 1.0 } else { f64::NAN });
    }
    Ok(1.0 - rss / tss)
}

/// Mean absolute error: the average magnitude of the residuals.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64, EmptySeriesError> {
    check_series(actual, predicted)?;

    let total: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();
    Ok(total / actual.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_scores_one_and_zero() {
        let actual = [10.0, 20.0, 30.0];
        assert_eq!(r_squared(&actual, &actual), Ok(1.0));
        assert_eq!(mean_absolute_error(&actual, &actual), Ok(0.0));
    }

    #[test]
    fn r_squared_matches_hand_computation() {
        let actual = [1.0, 2.0, 3.0, 4.0];
        let predicted = [1.5, 1.5, 3.5, 3.5];
        // mean = 2.5, RSS = 4 * 0.25 = 1.0, TSS = 5.0
        let r2 = r_squared(&actual, &predicted).unwrap();
        assert!((r2 - 0.8).abs() < 1e-12);
    }

    #[test]
    fn mae_matches_hand_computation() {
        let actual = [1.0, 2.0, 3.0];
        let predicted = [2.0, 2.0, 1.0];
        let mae = mean_absolute_error(&actual, &predicted).unwrap();
        assert!((mae - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(r_squared(&[], &[]), Err(EmptySeriesError::Empty));
        assert_eq!(mean_absolute_error(&[], &[1.0]), Err(EmptySeriesError::Empty));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            r_squared(&[1.0, 2.0], &[1.0]),
            Err(EmptySeriesError::LengthMismatch {
                actual: 2,
                predicted: 1
            })
        );
    }

    #[test]
    fn zero_variance_target_uses_documented_fallback() {
        let constant = [5.0, 5.0, 5.0];
        // Residuals all zero → 1.0.
        assert_eq!(r_squared(&constant, &constant), Ok(1.0));
        // Non-zero residuals on a constant target → NaN.
        let off = [5.0, 6.0, 5.0];
        assert!(r_squared(&constant, &off).unwrap().is_nan());
    }
}
