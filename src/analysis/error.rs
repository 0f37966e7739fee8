use thiserror::Error;

// ---------------------------------------------------------------------------
// Analysis error taxonomy
// ---------------------------------------------------------------------------

/// Why a regression fit could not be produced. These are per-view errors:
/// the filtered table still renders, only model-dependent views show them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegressionError {
    /// The filter selected no complete rows, so there is nothing to fit.
    #[error("the current filter selects no complete rows, so no model can be fitted")]
    InsufficientData,

    /// The SVD backend refused the system. Rank deficiency is NOT reported
    /// here: underdetermined systems get the least-norm solution instead.
    #[error("least-squares solve failed: {0}")]
    SolveFailed(&'static str),
}

/// Metrics need two aligned, non-empty series.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmptySeriesError {
    #[error("metric series are empty")]
    Empty,

    #[error("series lengths differ: {actual} actual vs {predicted} predicted values")]
    LengthMismatch { actual: usize, predicted: usize },
}

/// Everything the per-filter pipeline run can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Metrics(#[from] EmptySeriesError),
}
