// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Every command prints exactly one JSON document on stdout;
// a failure response also sets a non-zero exit code.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::context::AppContext;
use crate::application::response::Response;
use crate::application::run_use_case::RunUseCase;
use crate::application::show_use_case::ShowUseCase;
use crate::application::train_use_case::TrainUseCase;
use crate::infra::config::AppConfig;
use crate::infra::network_store::NetworkStore;
use commands::{Commands, RunArgs, ShowArgs, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "netlab",
    version = "0.1.0",
    about = "Train small feed-forward networks on CSV data sets and run them."
)]
pub struct Cli {
    /// JSON config file; defaults apply when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data sets directory
    #[arg(long, global = true)]
    pub datasets_dir: Option<String>,

    /// Override the fixed shuffle / weight seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the metrics directory
    #[arg(long, global = true)]
    pub metrics_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the context, dispatch, print the response.
    pub fn run(self) -> Result<ExitCode> {
        let ctx = AppContext::from_config(&self.config()?)?;

        let response = match self.command {
            Commands::Train(args) => Self::run_train(ctx, &args),
            Commands::Run(args)   => Self::run_run(ctx, args)?,
            Commands::Show(args)  => Self::run_show(ctx, &args),
            Commands::Datasets    => return Self::run_datasets(ctx),
        };

        println!("{}", response.to_json());
        Ok(if response.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }

    /// File config first, then flag overrides.
    fn config(&self) -> Result<AppConfig> {
        let mut cfg = AppConfig::load(self.config.as_deref())?;
        if let Some(dir) = &self.datasets_dir {
            cfg.datasets_dir = dir.clone();
        }
        if self.seed.is_some() {
            cfg.shuffle_seed = self.seed;
        }
        if self.metrics_dir.is_some() {
            cfg.metrics_dir = self.metrics_dir.clone();
        }
        Ok(cfg)
    }

    fn run_train(ctx: AppContext, args: &TrainArgs) -> Response {
        tracing::info!("Training request for data set {:?}", args.training_set);

        let response = TrainUseCase::new(ctx).respond(&args.into());
        if let (Some(path), Response::Train(trained)) = (&args.save_to, &response) {
            // The trained network is still printed if saving fails
            if let Err(e) = NetworkStore::save(path, &trained.network) {
                tracing::error!("Trained network was not saved: {e:#}");
            }
        }
        response
    }

    fn run_run(ctx: AppContext, args: RunArgs) -> Result<Response> {
        let params = args.into_params()?;
        Ok(RunUseCase::new(ctx).respond(&params))
    }

    fn run_show(ctx: AppContext, args: &ShowArgs) -> Response {
        ShowUseCase::new(ctx).respond(args.network.as_deref())
    }

    fn run_datasets(ctx: AppContext) -> Result<ExitCode> {
        let names = ShowUseCase::new(ctx).datasets()?;
        println!("{}", serde_json::to_string(&names)?);
        Ok(ExitCode::SUCCESS)
    }
}
