/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  job_applications.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate header → ApplicationTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  status ∈ selection → filtered rows
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  group by status → Vec<StatusCount>
///   └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
