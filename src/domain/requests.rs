// ============================================================
// Layer 3 — Request and Result Types
// ============================================================
// Plain data carried between the normalizer, the orchestrators
// and the response formatter. No behaviour beyond Display.

use std::fmt;

use serde::Serialize;

use crate::domain::architecture::ArchitectureSpec;

/// Epoch counts above this are clamped down.
/// Bounds how long a single training request can block.
pub const EPOCH_CAP: usize = 5;

/// Split ratio used when none (or an out-of-range one) is given
pub const DEFAULT_SPLIT_RATIO: u8 = 75;

/// Epoch count used when none is given
pub const DEFAULT_EPOCHS: usize = 5;

/// A fully defaulted, bounds-checked training request.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRequest {
    pub dataset_name: String,
    pub architecture: ArchitectureSpec,
    /// Percentage of rows used for training, always in 0..=100
    pub split_ratio:  u8,
    /// Always in 0..=EPOCH_CAP
    pub epoch_count:  usize,
}

/// What a training run hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingResult {
    pub trained_architecture:  ArchitectureSpec,
    pub average_epoch_seconds: f64,
    /// One entry per completed epoch, in epoch order
    pub per_epoch_error:       Vec<f64>,
    /// Wall-clock seconds of each completed epoch
    pub per_epoch_seconds:     Vec<f64>,
}

/// A single-vector evaluation request.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub architecture: ArchitectureSpec,
    pub input_vector: Vec<f64>,
}

/// The model's answer for one input vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InferenceResult {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl From<Vec<f64>> for InferenceResult {
    /// A one-element output collapses to a scalar
    fn from(mut outputs: Vec<f64>) -> Self {
        if outputs.len() == 1 {
            InferenceResult::Scalar(outputs.remove(0))
        } else {
            InferenceResult::Vector(outputs)
        }
    }
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceResult::Scalar(x) => write!(f, "{x}"),
            InferenceResult::Vector(xs) => {
                write!(f, "[")?;
                for (i, x) in xs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_output_is_scalar() {
        let r = InferenceResult::from(vec![0.25]);
        assert_eq!(r, InferenceResult::Scalar(0.25));
        assert_eq!(r.to_string(), "0.25");
    }

    #[test]
    fn test_multiple_outputs_render_as_list() {
        let r = InferenceResult::from(vec![0.5, 1.0]);
        assert_eq!(r.to_string(), "[0.5, 1]");
    }
}
