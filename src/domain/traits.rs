// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the system:
//
//   DatasetSource  → where named numeric tables come from
//                    (FsDatasetSource reads CSV files from disk)
//
//   ModelFactory + TrainableModel
//                  → the external network implementation
//                    (FeedForwardNetwork is the shipped one,
//                     tests plug in scripted stubs)
//
// The application and ml layers only ever see these traits, so
// a different storage backend or network library slots in
// without touching the orchestration code.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use std::collections::BTreeSet;

use crate::domain::architecture::ArchitectureSpec;
use crate::domain::dataset::{Dataset, Row};
use crate::domain::error::{CoreResult, ModelError};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Storage that holds named delimited numeric tables.
pub trait DatasetSource: Send + Sync {
    /// Names of every dataset currently available in storage.
    fn list(&self) -> CoreResult<BTreeSet<String>>;

    /// Read, parse and shuffle the named dataset.
    fn load(&self, name: &str) -> CoreResult<Dataset>;
}

// ─── EpochReport ──────────────────────────────────────────────────────────────
/// Per-epoch measurements reported by a training run.
/// Both vectors have one entry per completed epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochReport {
    pub per_epoch_error:   Vec<f64>,
    pub per_epoch_seconds: Vec<f64>,
}

// ─── TrainableModel ───────────────────────────────────────────────────────────
/// A network instance bound to one architecture.
/// Each request owns its own instance.
pub trait TrainableModel: Send {
    /// Run one input vector through the network.
    fn evaluate(&self, inputs: &[f64]) -> Result<Vec<f64>, ModelError>;

    /// Split rows into (training, evaluation) at `split_ratio` percent.
    fn partition<'a>(
        &self,
        rows:        &'a [Row],
        split_ratio: u8,
    ) -> Result<(&'a [Row], &'a [Row]), ModelError>;

    /// Train for at most `epochs` epochs, reporting error and
    /// wall-clock seconds for each one.
    fn train_epochs(
        &mut self,
        train:  &[Row],
        eval:   &[Row],
        epochs: usize,
    ) -> Result<EpochReport, ModelError>;

    /// The current architecture, including learned parameters.
    fn architecture(&self) -> ArchitectureSpec;
}

// ─── ModelFactory ─────────────────────────────────────────────────────────────
/// Builds TrainableModel instances from architecture descriptions.
pub trait ModelFactory: Send + Sync {
    fn construct(
        &self,
        architecture: &ArchitectureSpec,
    ) -> Result<Box<dyn TrainableModel>, ModelError>;

    /// The default architecture used when a request supplies none.
    fn baseline_architecture(&self) -> ArchitectureSpec;
}
