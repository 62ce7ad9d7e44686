mod cli;
mod commands;
mod config;
mod discover;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};
use config::Config;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("replay_core=info".parse()?)
                .add_directive("replay_dataset=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        }
    };

    match args.command {
        Command::Build {
            input,
            dataset,
            report,
            format,
            workers,
        } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            if let Some(dataset) = dataset {
                config.dataset_path = dataset;
            }
            if let Some(report) = report {
                config.report_path = report;
            }
            if let Some(format) = format {
                config.format = format.into();
            }
            if let Some(workers) = workers {
                config.workers = workers;
            }
            info!("Building dataset from {}", config.input_dir.display());
            commands::build::run(&config)?;
        }
        Command::Check { input, json } => {
            if let Some(input) = input {
                config.input_dir = input;
            }
            commands::check::run(&config, json)?;
        }
        Command::Inspect { file, hexdump } => {
            commands::inspect::run(&file, hexdump)?;
        }
    }

    Ok(())
}
