/// Data layer: core types, loading, and the term/party join.
///
/// Architecture:
/// ```text
///  BLS_private.csv        presidents.txt
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  loader   │          │  loader   │
///   └──────────┘          └──────────┘
///        │                      │
///        ▼                      ▼
///  TimeSeriesStore          TermRegistry
///        │                      │
///        └──────────┬───────────┘
///                   ▼
///             ┌───────────┐
///             │  change    │  per term: end − start
///             └───────────┘
///                   │
///                   ▼
///             ┌───────────┐
///             │ aggregate  │  D / R totals + per-term detail
///             └───────────┘
/// ```

pub mod aggregate;
pub mod change;
pub mod loader;
pub mod model;
