// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to serve one
// request at a time (train, run or show).
//
// Rules for this layer:
//   - No network math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layers 4 and 6)
//   - Only workflow coordination and response shaping
//
// Every use case answers with a Response; failures never
// escape as panics or leave the shared registry half-updated.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Shared registry, factory and metrics
pub mod context;

// Raw parameters → TrainingRequest
pub mod normalizer;

// Results → client-facing JSON
pub mod response;

// The training workflow
pub mod train_use_case;

// The single-evaluation workflow
pub mod run_use_case;

// The home view: network + available data sets
pub mod show_use_case;
