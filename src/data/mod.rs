// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between CSV files on disk and the row slices a
// model trains on:
//
//   dataSets/*.csv
//       │
//       ▼
//   FsDatasetSource   → lists files, parses rows, drops headers,
//       │               shuffles once
//       ▼
//   DatasetRegistry   → caches loaded datasets by name (LRU),
//       │               one load per cold name
//       ▼
//   split_at_ratio    → training / evaluation slices
//
// Reference: csv crate documentation
//            Rust Book §16 (Fearless Concurrency)

/// Reads CSV datasets from a directory
pub mod loader;

/// Bounded, thread-safe dataset cache
pub mod registry;

/// Shuffles rows and splits them into training / evaluation parts
pub mod splitter;
