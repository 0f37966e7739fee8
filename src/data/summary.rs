use std::collections::BTreeMap;

use super::model::{Dataset, Feature};

// ---------------------------------------------------------------------------
// Descriptive statistics for the Dashboard and Exploration views
// ---------------------------------------------------------------------------

/// Headline numbers for the Dashboard view, computed over the filtered rows.
/// Missing cells are skipped, not treated as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTotals {
    pub total_production: f64,
    pub mean_production: f64,
    pub total_investment: f64,
    /// How many rows carried a production value (mean denominator).
    pub production_count: usize,
}

/// Compute the Dashboard headline numbers for the given row indices.
pub fn dashboard_totals(dataset: &Dataset, indices: &[usize]) -> DashboardTotals {
    let production: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.rows[i].production)
        .collect();
    let total_production: f64 = production.iter().sum();
    let mean_production = if production.is_empty() {
        0.0
    } else {
        total_production / production.len() as f64
    };
    let total_investment: f64 = indices
        .iter()
        .filter_map(|&i| dataset.rows[i].investment)
        .sum();

    DashboardTotals {
        total_production,
        mean_production,
        total_investment,
        production_count: production.len(),
    }
}

/// Per-column descriptive statistics, one row of the Exploration stats table.
/// `std_dev` is the sample standard deviation (n − 1 denominator) and is 0
/// for fewer than two values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSummary {
    pub feature: Feature,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Descriptive statistics for every predictor column over the filtered rows.
pub fn feature_summaries(dataset: &Dataset, indices: &[usize]) -> Vec<FeatureSummary> {
    Feature::ALL
        .iter()
        .map(|&feature| {
            let values: Vec<f64> = indices
                .iter()
                .filter_map(|&i| dataset.rows[i].feature(feature))
                .collect();
            summarize(feature, &values)
        })
        .collect()
}

fn summarize(feature: Feature, values: &[f64]) -> FeatureSummary {
    let count = values.len();
    if count == 0 {
        return FeatureSummary {
            feature,
            count,
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = if count > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    } else {
        0.0
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    FeatureSummary {
        feature,
        count,
        mean,
        std_dev,
        min,
        max,
    }
}

// ---------------------------------------------------------------------------
// Histogram of production values
// ---------------------------------------------------------------------------

/// One equal-width histogram bin over `[start, end)`; the last bin is
/// closed on the right so the maximum lands inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin the production values of the filtered rows into `bin_count`
/// equal-width bins. Returns an empty vector when there are no production
/// values; a degenerate series (all values equal) collapses into one bin.
pub fn production_histogram(
    dataset: &Dataset,
    indices: &[usize],
    bin_count: usize,
) -> Vec<HistogramBin> {
    let values: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.rows[i].production)
        .collect();
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in &values {
        let idx = (((v - min) / width) as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }
    bins
}

// ---------------------------------------------------------------------------
// Production totals per district
// ---------------------------------------------------------------------------

/// Total production per district over the filtered rows, district-sorted.
/// Rows without a district name or production value are skipped.
pub fn production_by_district(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for &i in indices {
        let row = &dataset.rows[i];
        if let (Some(district), Some(production)) = (&row.district, row.production) {
            *totals.entry(district.clone()).or_insert(0.0) += production;
        }
    }
    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn row(district: &str, investment: Option<f64>, production: Option<f64>) -> Observation {
        Observation {
            district: Some(district.to_string()),
            farmers: Some(10.0),
            investment,
            projects: Some(2.0),
            workforce: Some(30.0),
            production,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row("Binong", Some(100.0), Some(50.0)),
            row("Binong", Some(200.0), Some(150.0)),
            row("Ciasem", None, Some(400.0)),
            row("Ciasem", Some(300.0), None),
        ])
    }

    #[test]
    fn totals_skip_missing_cells() {
        let ds = dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let totals = dashboard_totals(&ds, &indices);
        assert_eq!(totals.total_production, 600.0);
        assert_eq!(totals.production_count, 3);
        assert_eq!(totals.mean_production, 200.0);
        assert_eq!(totals.total_investment, 600.0);
    }

    #[test]
    fn summaries_cover_every_feature_in_order() {
        let ds = dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let summaries = feature_summaries(&ds, &indices);
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].feature, Feature::Farmers);
        assert_eq!(summaries[0].count, 4);
        assert_eq!(summaries[0].mean, 10.0);
        assert_eq!(summaries[0].std_dev, 0.0);

        // One investment cell is missing.
        assert_eq!(summaries[1].feature, Feature::Investment);
        assert_eq!(summaries[1].count, 3);
        assert_eq!(summaries[1].mean, 200.0);
        assert_eq!(summaries[1].min, 100.0);
        assert_eq!(summaries[1].max, 300.0);
        assert!((summaries[1].std_dev - 100.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_counts_sum_to_series_length() {
        let ds = dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let bins = production_histogram(&ds, &indices, 5);
        assert_eq!(bins.len(), 5);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
        // Maximum value falls into the last bin, not past it.
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn histogram_degenerate_series_collapses_to_one_bin() {
        let ds = Dataset::from_rows(vec![
            row("Binong", Some(1.0), Some(75.0)),
            row("Binong", Some(1.0), Some(75.0)),
        ]);
        let bins = production_histogram(&ds, &[0, 1], 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn district_totals_are_sorted_and_skip_missing() {
        let ds = dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        assert_eq!(
            production_by_district(&ds, &indices),
            vec![("Binong".to_string(), 200.0), ("Ciasem".to_string(), 400.0)]
        );
    }

    #[test]
    fn empty_selection_yields_empty_outputs() {
        let ds = dataset();
        let totals = dashboard_totals(&ds, &[]);
        assert_eq!(totals.production_count, 0);
        assert_eq!(totals.mean_production, 0.0);
        assert!(production_histogram(&ds, &[], 20).is_empty());
        assert!(production_by_district(&ds, &[]).is_empty());
    }
}
