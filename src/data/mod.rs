/// Data layer: core types, loading, and classification.
///
/// Architecture:
/// ```text
///   demo.data  (<x> <y> <unused> <flag> per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Record
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify  │  flag > 0.5 → also "down"
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ PointSets │  up / down, file order
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;
