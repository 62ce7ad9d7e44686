//! Build command: validate every replay and write both artifacts.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use replay_core::{BatchOutput, DatasetFormat, Pipeline};
use tracing::info;

use crate::config::Config;
use crate::discover::list_replays;

/// Run the build command
pub fn run(config: &Config) -> Result<BatchOutput> {
    let paths = list_replays(&config.input_dir)?;
    info!(
        "Found {} replay files in {}",
        paths.len(),
        config.input_dir.display()
    );

    let output = Pipeline::new(config.pipeline_options())
        .run_paths(&paths)
        .context("Failed to process replays")?;

    write_report(&config.report_path, &output)?;
    write_dataset(&config.dataset_path, config.format, &output)?;

    eprintln!(
        "Excluded replays: {} out of {}",
        output.report.rejected(),
        output.report.total()
    );
    eprintln!(
        "Wrote {} rows to {}",
        output.rows.len(),
        config.dataset_path.display()
    );
    Ok(output)
}

/// Write the diagnostics summary
pub fn write_report(path: &Path, output: &BatchOutput) -> Result<()> {
    fs::write(path, output.report.summary())
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    info!("Saved diagnostics to {}", path.display());
    Ok(())
}

/// Write the dataset rows, header first
pub fn write_dataset(path: &Path, format: DatasetFormat, output: &BatchOutput) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create dataset {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    format
        .write_rows(&mut writer, &output.rows)
        .with_context(|| format!("Failed to write dataset {}", path.display()))?;
    info!("Saved {} rows to {}", output.rows.len(), path.display());
    Ok(())
}
