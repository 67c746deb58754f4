// ============================================================
// Layer 5 — ML Layer
// ============================================================
// Everything that touches a Trainable Model:
//
//   model.rs      — FeedForwardNetwork, the network shipped
//                   with the binary, and its NetworkFactory
//
//   trainer.rs    — the training orchestrator: split, bounded
//                   epoch run, per-epoch error and timing
//
//   inferencer.rs — the inference runner: build a model and
//                   evaluate a single input vector
//
// trainer and inferencer only use the domain traits, so they
// work with any TrainableModel implementation.
//
// Reference: Rust Book §17 (Trait Objects)

/// Reference sigmoid network and its factory
pub mod model;

/// Bounded training run over a cached dataset
pub mod trainer;

/// Single-vector evaluation
pub mod inferencer;
