/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  assets/encalhes.csv  (windows-1252, ';' delimited)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse → StrandingTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ StrandingTable  │  Vec<Stranding>, species index, year bounds
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ aggregate  │  grouped counts / map points
///   └──────────┘      └────────────┘
/// ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
