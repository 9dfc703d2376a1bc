/// Data layer: core types, loading, and the filter → present pipeline.
///
/// Architecture:
/// ```text
///   SQLite (aapi_dash.db)
///        │
///        ▼
///   ┌──────────┐
///   │  source   │  run QuerySpec → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   registry    │  every Dataset, loaded once, read-only
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  filter by selection → chart / pie / table artifact
///   └──────────┘
/// ```

pub mod model;
pub mod pipeline;
pub mod queries;
pub mod registry;
pub mod source;
