// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that sit around the core:
//
//   config.rs        — AppConfig, read from an optional JSON
//                      file and overridden by CLI flags
//
//   metrics.rs       — per-epoch error/timing rows appended to
//                      a CSV file after each training run
//
//   network_store.rs — trained networks saved as compact text
//                      and read back for later runs
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Runtime configuration
pub mod config;

/// Training metrics CSV logger
pub mod metrics;

/// Compact-text network persistence
pub mod network_store;
