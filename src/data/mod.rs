/// Data layer: core types, loading, filtering and descriptive statistics.
///
/// Architecture:
/// ```text
///        .csv
///         │
///         ▼
///    ┌──────────┐
///    │  loader   │  parse file → Dataset
///    └──────────┘
///         │
///         ▼
///    ┌──────────┐
///    │ Dataset   │  Vec<Observation>, district index
///    └──────────┘
///         │
///         ▼
///    ┌──────────┐
///    │  filter   │  district selection → filtered row indices
///    └──────────┘
///         │
///         ▼
///    ┌──────────┐
///    │ summary   │  totals, describe table, histogram, per-district sums
///    └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
