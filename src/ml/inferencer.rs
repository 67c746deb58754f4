// ============================================================
// Layer 5 — Inference Runner
// ============================================================
// Build a model for the given architecture and evaluate one
// input vector, exactly once. Width checks belong to the model;
// its complaints come back as InvalidInput.

use crate::domain::error::{CoreError, CoreResult};
use crate::domain::requests::{InferenceRequest, InferenceResult};
use crate::domain::traits::ModelFactory;

pub fn infer(factory: &dyn ModelFactory, request: &InferenceRequest) -> CoreResult<InferenceResult> {
    let model = factory
        .construct(&request.architecture)
        .map_err(|e| CoreError::invalid_input(e.to_string()))?;

    let outputs = model
        .evaluate(&request.input_vector)
        .map_err(|e| CoreError::invalid_input(e.to_string()))?;

    tracing::debug!("Evaluated {} inputs → {} outputs", request.input_vector.len(), outputs.len());
    Ok(InferenceResult::from(outputs))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::NetworkFactory;
    use serde_json::json;

    fn two_input_network() -> serde_json::Value {
        json!({
            "inputs": 2,
            "outputs": 1,
            "layers": [{"neurons": [{"bias": 0.0, "weights": [0.25, 0.25]}]}]
        })
    }

    #[test]
    fn test_two_input_network_gives_single_value() {
        let request = InferenceRequest {
            architecture: two_input_network(),
            input_vector: vec![1.0, 2.0],
        };
        let result = infer(&NetworkFactory::default(), &request).unwrap();
        // sigmoid(0.25 + 0.5)
        let expected = 1.0 / (1.0 + (-0.75f64).exp());
        assert_eq!(result, InferenceResult::Scalar(expected));
    }

    #[test]
    fn test_wrong_width_is_invalid_input() {
        let request = InferenceRequest {
            architecture: two_input_network(),
            input_vector: vec![1.0, 2.0, 3.0],
        };
        let err = infer(&NetworkFactory::default(), &request).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_unbuildable_architecture_is_invalid_input() {
        let request = InferenceRequest {
            architecture: json!({"inputs": "two"}),
            input_vector: vec![1.0],
        };
        let err = infer(&NetworkFactory::default(), &request).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
