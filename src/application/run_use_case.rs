// ============================================================
// Layer 2 — RunUseCase
// ============================================================
// Evaluates one input vector against a network description.
//
//   Step 1: Check both parameters are present
//   Step 2: Decode the network and the inputs (same codec)
//   Step 3: Evaluate once through the Inference Runner
//
// Inputs may be a list of numbers ("[1, 0]") or one number ("1").

use crate::application::context::AppContext;
use crate::application::response::{format_failure, format_inference, Response};
use crate::codec;
use crate::domain::architecture::as_number_vec;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::requests::{InferenceRequest, InferenceResult};
use crate::ml::inferencer;

/// Raw run parameters exactly as the caller sent them.
#[derive(Debug, Clone, Default)]
pub struct RunParams {
    pub network: Option<String>,
    pub inputs:  Option<String>,
}

pub struct RunUseCase {
    ctx: AppContext,
}

impl RunUseCase {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn respond(&self, params: &RunParams) -> Response {
        match self.execute(params) {
            Ok(result) => format_inference(&result),
            Err(e) => {
                tracing::warn!("Run request failed ({}): {}", e.kind(), e);
                format_failure(&e)
            }
        }
    }

    pub fn execute(&self, params: &RunParams) -> CoreResult<InferenceResult> {
        // ── Step 1: Presence ──────────────────────────────────────────────────
        let network = params
            .network
            .as_deref()
            .ok_or_else(|| CoreError::invalid_input("undefined Neural Network"))?;
        let inputs = params
            .inputs
            .as_deref()
            .ok_or_else(|| CoreError::invalid_input("undefined inputs"))?;

        // ── Step 2: Decode ────────────────────────────────────────────────────
        let architecture = codec::decode(network)?;
        let input_vector = as_number_vec(&codec::decode(inputs)?)
            .ok_or_else(|| CoreError::invalid_input("inputs must be a number or a list of numbers"))?;

        // ── Step 3: Evaluate ──────────────────────────────────────────────────
        let request = InferenceRequest { architecture, input_vector };
        inferencer::infer(self.ctx.factory.as_ref(), &request)
    }
}
