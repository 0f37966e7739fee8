use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// Number of predictor columns; fixes the width of the coefficient vector.
pub const FEATURE_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Feature – the four predictor columns, in fixed order
// ---------------------------------------------------------------------------

/// Predictor columns in the order shared by the design matrix, the
/// coefficient vector, and the prediction form. Reordering this enum would
/// silently reorder fitted coefficients, so don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Farmers,
    Investment,
    Projects,
    Workforce,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Farmers,
        Feature::Investment,
        Feature::Projects,
        Feature::Workforce,
    ];

    /// Column name in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            Feature::Farmers => "jumlah_pembudidaya",
            Feature::Investment => "invest_juta",
            Feature::Projects => "jumlah_proyek_perikanan",
            Feature::Workforce => "jumlah_tenaga_kerja_perikanan",
        }
    }

    /// Human-readable name used in tables, charts and the prediction form.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Farmers => "Fish farmers",
            Feature::Investment => "Investment (million Rp)",
            Feature::Projects => "Fishery projects",
            Feature::Workforce => "Fishery workforce",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single row of the dataset. Numeric cells may be empty in the source
/// file, hence the `Option`s; a row only takes part in model fitting when
/// all five numeric fields are present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "kemendagri_nama_kecamatan")]
    pub district: Option<String>,
    #[serde(rename = "jumlah_pembudidaya")]
    pub farmers: Option<f64>,
    #[serde(rename = "invest_juta")]
    pub investment: Option<f64>,
    #[serde(rename = "jumlah_proyek_perikanan")]
    pub projects: Option<f64>,
    #[serde(rename = "jumlah_tenaga_kerja_perikanan")]
    pub workforce: Option<f64>,
    #[serde(rename = "jumlah_produksi_ikan_gurame")]
    pub production: Option<f64>,
}

impl Observation {
    /// Value of a single predictor column.
    pub fn feature(&self, feature: Feature) -> Option<f64> {
        match feature {
            Feature::Farmers => self.farmers,
            Feature::Investment => self.investment,
            Feature::Projects => self.projects,
            Feature::Workforce => self.workforce,
        }
    }

    /// All four predictors, in [`Feature::ALL`] order, if none is missing.
    pub fn features(&self) -> Option<[f64; FEATURE_COUNT]> {
        Some([
            self.farmers?,
            self.investment?,
            self.projects?,
            self.workforce?,
        ])
    }

    /// Predictors and target together; `Some` exactly when the row is
    /// complete enough to participate in fitting.
    pub fn complete(&self) -> Option<([f64; FEATURE_COUNT], f64)> {
        Some((self.features()?, self.production?))
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table plus the sorted list of district names.
///
/// Loaded once at startup and treated as read-only afterwards; opening a
/// different file replaces the whole handle rather than mutating it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, in file order.
    pub rows: Vec<Observation>,
    /// Sorted distinct district names (rows without a district excluded).
    pub districts: Vec<String>,
}

impl Dataset {
    /// Build the district index from the parsed rows.
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        let districts: BTreeSet<String> = rows
            .iter()
            .filter_map(|row| row.district.clone())
            .collect();
        Dataset {
            rows,
            districts: districts.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FittedModel – the output of one least-squares fit
// ---------------------------------------------------------------------------

/// Coefficients and intercept of one ordinary least-squares fit, plus the
/// in-sample fitted values and the training target mean. Valid for one
/// filter selection only; recomputed from scratch whenever the filter
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    /// One coefficient per predictor, in [`Feature::ALL`] order.
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
    /// Fitted values for the complete rows the model was trained on,
    /// in row order.
    pub fitted: Vec<f64>,
    /// Mean of the training targets, used for the above/below-average
    /// prediction label.
    pub target_mean: f64,
}
