// ============================================================
// Layer 5 — Training Orchestrator
// ============================================================
// Drives one bounded training run against a cached dataset.
//
// The model decides how rows are split and how an epoch is
// trained. This function owns the request-level contract:
//   - never ask for more than `request.epoch_count` epochs
//   - one error and one timing value per completed epoch
//   - average epoch time = arithmetic mean of those timings
//
// Any model failure becomes CoreError::TrainingFailed with the
// model's message. No retries, no partial results.

use crate::domain::dataset::Dataset;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::requests::{TrainingRequest, TrainingResult};
use crate::domain::traits::TrainableModel;

pub fn train(
    request: &TrainingRequest,
    dataset: &Dataset,
    model:   &mut dyn TrainableModel,
) -> CoreResult<TrainingResult> {
    if dataset.is_empty() {
        tracing::warn!("Data set '{}' has no rows", dataset.name());
    } else {
        tracing::debug!(
            "Data set '{}': {} rows of width {}",
            dataset.name(),
            dataset.len(),
            dataset.width().unwrap_or_default(),
        );
    }

    let (train_rows, eval_rows) = model.partition(dataset.rows(), request.split_ratio)?;
    tracing::info!(
        "Training on '{}': {} train rows, {} eval rows, {} epochs",
        dataset.name(),
        train_rows.len(),
        eval_rows.len(),
        request.epoch_count,
    );

    let report = model.train_epochs(train_rows, eval_rows, request.epoch_count)?;

    let completed = report.per_epoch_error.len();
    if completed != report.per_epoch_seconds.len() {
        return Err(CoreError::TrainingFailed(format!(
            "model reported {completed} epoch errors but {} epoch timings",
            report.per_epoch_seconds.len()
        )));
    }
    if completed > request.epoch_count {
        return Err(CoreError::TrainingFailed(format!(
            "model ran {completed} epochs, at most {} were requested",
            request.epoch_count
        )));
    }

    let average_epoch_seconds = mean(&report.per_epoch_seconds);
    tracing::info!(
        "Training on '{}' finished: {} epochs, {:.4}s average per epoch",
        dataset.name(),
        completed,
        average_epoch_seconds,
    );

    Ok(TrainingResult {
        trained_architecture: model.architecture(),
        average_epoch_seconds,
        per_epoch_error:      report.per_epoch_error,
        per_epoch_seconds:    report.per_epoch_seconds,
    })
}

/// Arithmetic mean; 0.0 when nothing ran
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::splitter::split_at_ratio;
    use crate::domain::architecture::ArchitectureSpec;
    use crate::domain::dataset::Row;
    use crate::domain::error::ModelError;
    use crate::domain::traits::EpochReport;
    use serde_json::json;

    /// Replays fixed per-epoch numbers and records what it was asked to do.
    #[derive(Default)]
    struct ScriptedModel {
        errors:         Vec<f64>,
        seconds:        Vec<f64>,
        fail_with:      Option<ModelError>,
        overrun:        bool,
        seen_split:     Option<(usize, usize)>,
        seen_epochs:    Option<usize>,
    }

    impl TrainableModel for ScriptedModel {
        fn evaluate(&self, _inputs: &[f64]) -> Result<Vec<f64>, ModelError> {
            Ok(vec![0.0])
        }

        fn partition<'a>(&self, rows: &'a [Row], split_ratio: u8) -> Result<(&'a [Row], &'a [Row]), ModelError> {
            Ok(split_at_ratio(rows, split_ratio))
        }

        fn train_epochs(&mut self, train: &[Row], eval: &[Row], epochs: usize) -> Result<EpochReport, ModelError> {
            self.seen_split  = Some((train.len(), eval.len()));
            self.seen_epochs = Some(epochs);
            if let Some(e) = self.fail_with.clone() {
                return Err(e);
            }
            let n = if self.overrun { epochs + 1 } else { epochs };
            Ok(EpochReport {
                per_epoch_error:   self.errors.iter().copied().take(n).collect(),
                per_epoch_seconds: self.seconds.iter().copied().take(n).collect(),
            })
        }

        fn architecture(&self) -> ArchitectureSpec {
            json!({"trained": true})
        }
    }

    fn request(epochs: usize, ratio: u8) -> TrainingRequest {
        TrainingRequest {
            dataset_name: "d.csv".into(),
            architecture: json!({}),
            split_ratio:  ratio,
            epoch_count:  epochs,
        }
    }

    fn dataset(rows: usize) -> Dataset {
        Dataset::new("d.csv", (0..rows).map(|i| vec![i as f64]).collect())
    }

    fn scripted() -> ScriptedModel {
        ScriptedModel {
            errors:  vec![0.9, 0.5, 0.3, 0.2, 0.1, 0.05],
            seconds: vec![1.0, 2.0, 6.0, 1.0, 1.0, 1.0],
            ..Default::default()
        }
    }

    #[test]
    fn test_three_epochs_give_three_errors_and_mean_time() {
        let mut model = scripted();
        let result = train(&request(3, 75), &dataset(100), &mut model).unwrap();
        assert_eq!(result.per_epoch_error, vec![0.9, 0.5, 0.3]);
        assert_eq!(result.average_epoch_seconds, 3.0);
        assert_eq!(result.trained_architecture, json!({"trained": true}));
        assert_eq!(model.seen_epochs, Some(3));
        assert_eq!(model.seen_split, Some((75, 25)));
    }

    #[test]
    fn test_zero_epochs_average_is_zero() {
        let mut model = scripted();
        let result = train(&request(0, 75), &dataset(10), &mut model).unwrap();
        assert!(result.per_epoch_error.is_empty());
        assert_eq!(result.average_epoch_seconds, 0.0);
    }

    #[test]
    fn test_empty_dataset_reports_every_epoch() {
        let mut model = scripted();
        let result = train(&request(2, 75), &dataset(0), &mut model).unwrap();
        assert_eq!(model.seen_split, Some((0, 0)));
        assert_eq!(result.per_epoch_error, vec![0.9, 0.5]);
        assert_eq!(result.average_epoch_seconds, 1.5);
    }

    #[test]
    fn test_model_failure_is_carried_verbatim() {
        let mut model = ScriptedModel {
            fail_with: Some(ModelError::Other("singular matrix".into())),
            ..scripted()
        };
        let err = train(&request(2, 50), &dataset(10), &mut model).unwrap_err();
        assert_eq!(err, CoreError::TrainingFailed("singular matrix".into()));
    }

    #[test]
    fn test_overrunning_model_is_rejected() {
        let mut model = ScriptedModel { overrun: true, ..scripted() };
        let err = train(&request(2, 50), &dataset(10), &mut model).unwrap_err();
        assert!(matches!(err, CoreError::TrainingFailed(_)));
    }

    #[test]
    fn test_mismatched_report_is_rejected() {
        let mut model = ScriptedModel { seconds: vec![1.0], ..scripted() };
        let err = train(&request(3, 50), &dataset(10), &mut model).unwrap_err();
        assert!(matches!(err, CoreError::TrainingFailed(ref m) if m.contains("timings")));
    }
}
