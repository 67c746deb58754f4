// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Appends one CSV row per completed epoch of every training
// run, so error curves can be plotted across runs.
//
// Output file: {metrics_dir}/metrics.csv
//
// Example CSV output:
//   dataset,epoch,error,seconds
//   iris.csv,1,0.213400,0.004100
//   iris.csv,2,0.187200,0.003900
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

use crate::domain::requests::TrainingResult;

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// Dataset the run trained on
    pub dataset: String,

    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Error the model reported for this epoch
    pub error: f64,

    /// Wall-clock duration of the epoch
    pub seconds: f64,
}

impl EpochMetrics {
    /// One record per completed epoch of `result`
    pub fn from_result(dataset: &str, result: &TrainingResult) -> Vec<Self> {
        result
            .per_epoch_error
            .iter()
            .zip(&result.per_epoch_seconds)
            .enumerate()
            .map(|(i, (&error, &seconds))| Self {
                dataset: dataset.to_string(),
                epoch: i + 1,
                error,
                seconds,
            })
            .collect()
    }
}

/// Logs epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "dataset,epoch,error,seconds")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append rows for every given epoch.
    pub fn log_all(&self, metrics: &[EpochMetrics]) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        for m in metrics {
            writeln!(f, "{},{},{:.6},{:.6}", m.dataset, m.epoch, m.error, m.seconds)?;
        }
        tracing::debug!("Logged {} epoch rows to '{}'", metrics.len(), self.csv_path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result() -> TrainingResult {
        TrainingResult {
            trained_architecture:  json!({}),
            average_epoch_seconds: 0.5,
            per_epoch_error:       vec![0.25, 0.125],
            per_epoch_seconds:     vec![0.5, 0.5],
        }
    }

    #[test]
    fn test_records_are_numbered_from_one() {
        let records = EpochMetrics::from_result("xor.csv", &result());
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].epoch, 2);
        assert_eq!(records[1].error, 0.125);
    }

    #[test]
    fn test_log_appends_after_header() {
        let dir    = tempfile::tempdir().unwrap();
        let logger = MetricsLogger::new(dir.path().to_string_lossy()).unwrap();
        logger.log_all(&EpochMetrics::from_result("xor.csv", &result())).unwrap();
        logger.log_all(&EpochMetrics::from_result("or.csv", &result())).unwrap();

        let text  = fs::read_to_string(dir.path().join("metrics.csv")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "dataset,epoch,error,seconds");
        assert_eq!(lines[1], "xor.csv,1,0.250000,0.500000");
        assert_eq!(lines.len(), 5);
    }
}
