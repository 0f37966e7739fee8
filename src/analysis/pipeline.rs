use super::error::PipelineError;
use super::{metrics, regression};
use crate::data::filter::{filtered_indices, DistrictSelection};
use crate::data::model::{Dataset, Feature, FittedModel};

// ---------------------------------------------------------------------------
// The filter → fit → metrics pipeline
// ---------------------------------------------------------------------------

/// A fitted model together with its in-sample goodness-of-fit numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub model: FittedModel,
    pub r_squared: f64,
    pub mean_absolute_error: f64,
}

/// Everything one filter selection produces. The indices are always
/// present; a failed fit only disables the model-dependent views.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Row indices matching the selection, in file order.
    pub indices: Vec<usize>,
    pub fit: Result<FitReport, PipelineError>,
}

/// Run the whole pipeline for one selection. No incremental state: every
/// call filters, fits and scores from scratch, which keeps the result an
/// exact pure function of `(dataset, selection)`.
pub fn run(dataset: &Dataset, selection: &DistrictSelection) -> PipelineOutput {
    let indices = filtered_indices(dataset, selection);
    let fit = fit_report(dataset, &indices);
    if let Err(err) = &fit {
        log::debug!("pipeline fit unavailable for {:?}: {err}", selection.label());
    }
    PipelineOutput { indices, fit }
}

fn fit_report(dataset: &Dataset, indices: &[usize]) -> Result<FitReport, PipelineError> {
    let model = regression::fit(dataset, indices)?;

    // Targets of the complete rows, in the same order the engine used
    // them; same skip rule as the engine so the series stay aligned.
    let actual: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.rows.get(i)?.complete().map(|(_, y)| y))
        .collect();

    let r_squared = metrics::r_squared(&actual, &model.fitted)?;
    let mean_absolute_error = metrics::mean_absolute_error(&actual, &model.fitted)?;

    Ok(FitReport {
        model,
        r_squared,
        mean_absolute_error,
    })
}

/// The predictor with the largest-magnitude coefficient; ties go to the
/// earliest feature, matching the original report's first-maximum rule.
pub fn most_influential_feature(model: &FittedModel) -> Feature {
    let mut best = Feature::ALL[0];
    let mut best_magnitude = model.coefficients[0].abs();
    for (&feature, &coefficient) in Feature::ALL.iter().zip(model.coefficients.iter()).skip(1) {
        if coefficient.abs() > best_magnitude {
            best = feature;
            best_magnitude = coefficient.abs();
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::error::RegressionError;
    use crate::analysis::predict;
    use crate::data::model::Observation;

    fn row(district: &str, features: [f64; 4], production: f64) -> Observation {
        Observation {
            district: Some(district.to_string()),
            farmers: Some(features[0]),
            investment: Some(features[1]),
            projects: Some(features[2]),
            workforce: Some(features[3]),
            production: Some(production),
        }
    }

    #[test]
    fn unknown_district_yields_empty_view_and_insufficient_data() {
        let ds = Dataset::from_rows(vec![row("A", [10.0, 5.0, 2.0, 3.0], 100.0)]);
        let out = run(&ds, &DistrictSelection::District("B".to_string()));
        assert!(out.indices.is_empty());
        assert_eq!(
            out.fit.unwrap_err(),
            PipelineError::Regression(RegressionError::InsufficientData)
        );
    }

    /// Two rows in district "A", filter on "A", fit the underdetermined
    /// system, get the least-norm model back.
    #[test]
    fn two_row_district_end_to_end() {
        let ds = Dataset::from_rows(vec![
            row("A", [10.0, 5.0, 2.0, 3.0], 100.0),
            row("A", [20.0, 10.0, 4.0, 6.0], 200.0),
        ]);
        let out = run(&ds, &DistrictSelection::District("A".to_string()));
        assert_eq!(out.indices, vec![0, 1]);

        let report = out.fit.unwrap();
        // Interpolating system: the in-sample fit is exact.
        assert!((report.r_squared - 1.0).abs() < 1e-9);
        assert!(report.mean_absolute_error < 1e-6);
        assert!((report.model.target_mean - 150.0).abs() < 1e-12);
    }

    #[test]
    fn all_selection_fits_over_every_row() {
        let ds = Dataset::from_rows(vec![
            row("A", [1.0, 0.0, 0.0, 0.0], 3.0),
            row("A", [2.0, 0.0, 0.0, 0.0], 5.0),
            row("B", [3.0, 0.0, 0.0, 0.0], 7.0),
            row("B", [4.0, 0.0, 0.0, 0.0], 9.0),
            row("B", [5.0, 0.0, 0.0, 0.0], 11.0),
            row("B", [6.0, 0.0, 0.0, 0.0], 13.0),
        ]);
        let out = run(&ds, &DistrictSelection::All);
        assert_eq!(out.indices.len(), 6);

        // y = 1 + 2 * farmers, other columns silent.
        let report = out.fit.unwrap();
        assert!((report.model.intercept - 1.0).abs() < 1e-8);
        assert!((report.model.coefficients[0] - 2.0).abs() < 1e-8);
        assert!((report.r_squared - 1.0).abs() < 1e-9);

        let (value, _) = predict::predict_with_outlook(&report.model, &[10.0, 0.0, 0.0, 0.0]);
        assert!((value - 21.0).abs() < 1e-8);
    }

    #[test]
    fn most_influential_picks_largest_magnitude_first_on_ties() {
        let model = FittedModel {
            coefficients: [1.0, -3.5, 2.0, 3.5],
            intercept: 0.0,
            fitted: Vec::new(),
            target_mean: 0.0,
        };
        // |-3.5| ties |3.5|; the earlier feature wins.
        assert_eq!(most_influential_feature(&model), Feature::Investment);
    }

    /// `PipelineOutput` is cached in the UI state and handed around by
    /// value, so the whole output — including a failed fit — must clone.
    #[test]
    fn output_clones_including_a_failed_fit() {
        let ds = Dataset::from_rows(vec![row("A", [10.0, 5.0, 2.0, 3.0], 100.0)]);
        let failed = run(&ds, &DistrictSelection::District("B".to_string()));
        let copy = failed.clone();
        assert_eq!(copy.indices, failed.indices);
        assert_eq!(copy.fit.unwrap_err(), failed.fit.unwrap_err());

        let ok = run(&ds, &DistrictSelection::All);
        let copy = ok.clone();
        assert_eq!(copy.fit.unwrap(), ok.fit.unwrap());
    }

    #[test]
    fn rerun_is_deterministic() {
        let ds = Dataset::from_rows(vec![
            row("A", [1.0, 2.0, 3.0, 4.0], 10.0),
            row("A", [2.0, 3.0, 4.0, 5.0], 14.0),
            row("A", [5.0, 1.0, 2.0, 8.0], 20.0),
        ]);
        let selection = DistrictSelection::All;
        let a = run(&ds, &selection);
        let b = run(&ds, &selection);
        assert_eq!(a.indices, b.indices);
        assert_eq!(a.fit.unwrap(), b.fit.unwrap());
    }
}
