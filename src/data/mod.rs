/// Data layer: core types, loading, and downsampling.
///
/// Architecture:
/// ```text
///  annealing.txt            <name>.txt
///        │                      │
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  loader   │          │  loader   │  first line → NamedSeries
///   └──────────┘          └──────────┘
///        │ Vec<SampleLine>
///        ▼
///   ┌────────────┐
///   │ downsample │  stride = len / 100 → annealing2.txt
///   └────────────┘
/// ```

pub mod downsample;
pub mod loader;
pub mod model;
