mod cli;
mod application;
mod codec;
mod domain;
mod data;
mod ml;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the JSON response
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("netlab=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
