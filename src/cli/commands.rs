// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and their flags:
//
//   train    → train a network on one data set
//   run      → evaluate one input vector
//   show     → the network being edited + available data sets
//   datasets → just the data set names
//
// Request fields stay raw strings here: defaulting, clamping
// and parsing all belong to Layer 2, so `--epochs 50` and
// `--epochs abc` reach the normalizer untouched.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::normalizer::TrainParams;
use crate::application::run_use_case::RunParams;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train a network on a data set and print the trained network
    Train(TrainArgs),

    /// Evaluate a network on one input vector
    Run(RunArgs),

    /// Show a network (the baseline by default) and the data sets
    Show(ShowArgs),

    /// List the data sets available for training
    Datasets,
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Data set file name inside the data sets directory
    #[arg(long)]
    pub training_set: Option<String>,

    /// Network description; the baseline network when omitted
    #[arg(long)]
    pub network: Option<String>,

    /// Percentage of rows used for training (0-100, default 75)
    #[arg(long)]
    pub train_ratio: Option<String>,

    /// Number of epochs (capped at 5, default 5)
    #[arg(long)]
    pub epochs: Option<String>,

    /// Also write the trained network to this file
    #[arg(long)]
    pub save_to: Option<PathBuf>,
}

/// Convert CLI TrainArgs into raw application parameters.
/// The application layer never sees clap types.
impl From<&TrainArgs> for TrainParams {
    fn from(a: &TrainArgs) -> Self {
        TrainParams {
            training_set: a.training_set.clone(),
            network:      a.network.clone(),
            train_ratio:  a.train_ratio.clone(),
            epochs:       a.epochs.clone(),
        }
    }
}

/// All arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Network description
    #[arg(long, conflicts_with = "network_file")]
    pub network: Option<String>,

    /// File written by `train --save-to`
    #[arg(long)]
    pub network_file: Option<PathBuf>,

    /// Input vector, e.g. "[1, 0]"
    #[arg(long)]
    pub inputs: Option<String>,
}

impl RunArgs {
    /// Resolve the network text from the flag or the file.
    pub fn into_params(self) -> anyhow::Result<RunParams> {
        let network = match self.network_file {
            Some(path) => Some(crate::infra::network_store::NetworkStore::load_text(&path)?),
            None => self.network,
        };
        Ok(RunParams {
            network,
            inputs: self.inputs,
        })
    }
}

/// All arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Network description; the baseline network when omitted
    #[arg(long)]
    pub network: Option<String>,
}
