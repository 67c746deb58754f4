// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates one training request in order:
//
//   Step 1: Normalize raw parameters   (RequestNormalizer)
//           └─ resolves the dataset through the registry
//   Step 2: Build the model            (ModelFactory)
//   Step 3: Run the bounded training   (ml::trainer)
//   Step 4: Log per-epoch metrics      (infra::metrics, optional)
//   Step 5: Format the response        (response)
//
// A failure at any step ends the request with a failure
// response; the shared registry is left as it was.

use crate::application::context::AppContext;
use crate::application::normalizer::{RequestNormalizer, TrainParams};
use crate::application::response::{format_failure, format_training, Response};
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::requests::TrainingResult;
use crate::infra::metrics::EpochMetrics;
use crate::ml::trainer;

pub struct TrainUseCase {
    ctx: AppContext,
}

impl TrainUseCase {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Run the request and always produce a response.
    pub fn respond(&self, params: &TrainParams) -> Response {
        match self.execute(params) {
            Ok(result) => format_training(&result),
            Err(e) => {
                tracing::warn!("Training request failed ({}): {}", e.kind(), e);
                format_failure(&e)
            }
        }
    }

    /// Execute the full training pipeline end to end.
    pub fn execute(&self, params: &TrainParams) -> CoreResult<TrainingResult> {
        // ── Step 1: Normalize ─────────────────────────────────────────────────
        let normalizer = RequestNormalizer::new(&self.ctx.registry, self.ctx.factory.as_ref());
        let (request, dataset) = normalizer.normalize(params)?;

        // ── Step 2: Build a private model instance ────────────────────────────
        let mut model = self
            .ctx
            .factory
            .construct(&request.architecture)
            .map_err(|e| CoreError::invalid_input(e.to_string()))?;

        // ── Step 3: Train ─────────────────────────────────────────────────────
        let result = trainer::train(&request, &dataset, model.as_mut())?;

        // ── Step 4: Metrics (best effort) ─────────────────────────────────────
        if let Some(logger) = &self.ctx.metrics {
            let records = EpochMetrics::from_result(&request.dataset_name, &result);
            if let Err(e) = logger.log_all(&records) {
                tracing::warn!("Could not write epoch metrics: {e:#}");
            }
        }

        Ok(result)
    }
}
