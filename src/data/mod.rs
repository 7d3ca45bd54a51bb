/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  data/<curve-set>_<algorithm>.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  two '-'-terminated sections → Comparison
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ Comparison  │  first / second Series of (size, count)
///   └────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  weighted scaled averages, improvement factor
///   └───────────┘
/// ```
/// `label` turns the file name into the chart title.

pub mod aggregate;
pub mod label;
pub mod loader;
pub mod model;
