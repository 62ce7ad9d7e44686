//! Check command: validate replays without writing a dataset.

use anyhow::{Context, Result};
use replay_core::Pipeline;
use tracing::info;

use crate::config::Config;
use crate::discover::list_replays;

/// Run the check command
pub fn run(config: &Config, json: bool) -> Result<()> {
    let paths = list_replays(&config.input_dir)?;
    info!("Checking {} replay files", paths.len());

    let output = Pipeline::new(config.pipeline_options())
        .run_paths(&paths)
        .context("Failed to process replays")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output.report.to_summary())?
        );
    } else {
        print!("{}", output.report.summary());
    }
    Ok(())
}
