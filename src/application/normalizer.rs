// ============================================================
// Layer 2 — Request Normalizer
// ============================================================
// Turns the raw, optional strings of a training request into a
// fully defaulted, bounds-checked TrainingRequest.
//
// Rules:
//   training set  required; must be cached or present in storage
//   network       absent → baseline architecture
//                 present → decoded by the codec (ParseError on failure)
//   train-ratio   absent → 75
//                 outside 0..=100 → 75 (replaced, not clamped)
//   epochs        absent → 5
//                 present → clamped to 0..=EPOCH_CAP
//
// Numbers must be plain integers ("7", " +7 ", "-3"); anything
// else is a ParseError. Integers too large for i64 saturate, so
// "99999999999999999999" epochs still clamps to EPOCH_CAP.

use std::num::IntErrorKind;
use std::sync::Arc;

use crate::codec;
use crate::data::registry::DatasetRegistry;
use crate::domain::dataset::Dataset;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::requests::{TrainingRequest, DEFAULT_EPOCHS, DEFAULT_SPLIT_RATIO, EPOCH_CAP};
use crate::domain::traits::ModelFactory;

/// Raw training parameters exactly as the caller sent them.
#[derive(Debug, Clone, Default)]
pub struct TrainParams {
    pub training_set: Option<String>,
    pub network:      Option<String>,
    pub train_ratio:  Option<String>,
    pub epochs:       Option<String>,
}

pub struct RequestNormalizer<'a> {
    registry: &'a DatasetRegistry,
    factory:  &'a dyn ModelFactory,
}

impl<'a> RequestNormalizer<'a> {
    pub fn new(registry: &'a DatasetRegistry, factory: &'a dyn ModelFactory) -> Self {
        Self { registry, factory }
    }

    /// Validate and default every field; also returns the resolved dataset.
    pub fn normalize(&self, params: &TrainParams) -> CoreResult<(TrainingRequest, Arc<Dataset>)> {
        let dataset_name = params
            .training_set
            .as_deref()
            .ok_or_else(|| CoreError::invalid_input("No training set specified"))?;
        let dataset = self.registry.get(dataset_name)?;

        let architecture = match params.network.as_deref() {
            Some(text) => codec::decode(text)?,
            None => {
                tracing::debug!("No network given, using baseline architecture");
                self.factory.baseline_architecture()
            }
        };

        let split_ratio = normalize_split_ratio(parse_optional("train-ratio", params.train_ratio.as_deref())?);
        let epoch_count = normalize_epochs(parse_optional("epochs", params.epochs.as_deref())?);

        let request = TrainingRequest {
            dataset_name: dataset_name.to_string(),
            architecture,
            split_ratio,
            epoch_count,
        };
        Ok((request, dataset))
    }
}

/// Absent or out-of-range ratios become the default; valid ones pass through.
pub fn normalize_split_ratio(raw: Option<i64>) -> u8 {
    match raw {
        None => DEFAULT_SPLIT_RATIO,
        Some(r) => match u8::try_from(r) {
            Ok(r) if r <= 100 => r,
            _ => {
                tracing::debug!("Split ratio {} out of range, using {}", r, DEFAULT_SPLIT_RATIO);
                DEFAULT_SPLIT_RATIO
            }
        },
    }
}

/// Absent epochs become the default; present ones are clamped to 0..=EPOCH_CAP.
pub fn normalize_epochs(raw: Option<i64>) -> usize {
    match raw {
        None => DEFAULT_EPOCHS,
        Some(e) => {
            let cap = EPOCH_CAP as i64;
            if e > cap {
                tracing::debug!("Epoch count {} clamped to {}", e, EPOCH_CAP);
            }
            e.clamp(0, cap) as usize
        }
    }
}

fn parse_optional(field: &str, text: Option<&str>) -> CoreResult<Option<i64>> {
    text.map(|t| parse_int(field, t)).transpose()
}

fn parse_int(field: &str, text: &str) -> CoreResult<i64> {
    match text.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(CoreError::parse(format!("invalid integer for {field}: '{text}'"))),
        },
    }
}
