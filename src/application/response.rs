// ============================================================
// Layer 2 — Result Formatter
// ============================================================
// Shapes use-case results into the response objects handed back
// to the caller. Every response carries a `success` flag:
//
//   train   {"success": true, "network": "<compact>",
//            "message": "Average time per epoch: 0.0021 sec",
//            "epochErrors": [0.24, 0.21, ...]}
//   run     {"success": true, "message": "0.73", "output": 0.73}
//   show    {"success": true, "network": "<compact>", "files": [...]}
//   failure {"success": false, "error": "<message>"}
//
// Formatting is pure and total: nothing in here can fail.

use serde::Serialize;

use crate::codec;
use crate::domain::architecture::ArchitectureSpec;
use crate::domain::error::CoreError;
use crate::domain::requests::{InferenceResult, TrainingResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainResponse {
    pub success:      bool,
    pub network:      String,
    pub message:      String,
    pub epoch_errors: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResponse {
    pub success: bool,
    pub message: String,
    pub output:  InferenceResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowResponse {
    pub success: bool,
    pub network: String,
    pub files:   Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error:   String,
}

/// Any response the use cases produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Train(TrainResponse),
    Run(RunResponse),
    Show(ShowResponse),
    Failure(FailureResponse),
}

impl Response {
    pub fn is_success(&self) -> bool {
        !matches!(self, Response::Failure(_))
    }

    /// Single-line JSON rendering.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"success\":false,\"error\":\"{}\"}}", e.to_string().replace('"', "'"))
        })
    }
}

pub fn format_training(result: &TrainingResult) -> Response {
    Response::Train(TrainResponse {
        success:      true,
        network:      codec::encode(&result.trained_architecture),
        message:      format!("Average time per epoch: {} sec", result.average_epoch_seconds),
        epoch_errors: result.per_epoch_error.clone(),
    })
}

pub fn format_inference(result: &InferenceResult) -> Response {
    Response::Run(RunResponse {
        success: true,
        message: result.to_string(),
        output:  result.clone(),
    })
}

pub fn format_show(network: &ArchitectureSpec, files: Vec<String>) -> Response {
    Response::Show(ShowResponse {
        success: true,
        network: codec::encode(network),
        files,
    })
}

pub fn format_failure(error: &CoreError) -> Response {
    Response::Failure(FailureResponse {
        success: false,
        error:   error.to_string(),
    })
}
