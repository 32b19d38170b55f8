/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → StudentDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ StudentDataset │  Vec<Row>, column index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ analysis  │  derived column, correlations, grouped means
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
