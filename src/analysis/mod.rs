/// Analysis layer: the regression model and everything derived from it.
///
/// Pure functions only — no UI types, no I/O. The `pipeline` module is the
/// single entry point the shell calls on every filter change:
/// `(Dataset, DistrictSelection) → PipelineOutput`.

pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod predict;
pub mod regression;
