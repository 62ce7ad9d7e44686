//! Configuration file loading.
//!
//! Values come from three layers: built-in defaults, an optional TOML file,
//! then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use replay_core::{DatasetFormat, PipelineOptions};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory containing replay files
    pub input_dir: PathBuf,
    /// Dataset output path
    pub dataset_path: PathBuf,
    /// Diagnostics output path
    pub report_path: PathBuf,
    /// Dataset format
    pub format: DatasetFormat,
    /// Worker threads
    pub workers: usize,
    /// Log progress every this many replays
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("replay files"),
            dataset_path: PathBuf::from("replay_data.csv"),
            report_path: PathBuf::from("invalid_replays.txt"),
            format: DatasetFormat::Csv,
            workers: 1,
            progress_interval: 500,
        }
    }
}

impl Config {
    /// Load configuration; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::builder()
            .workers(self.workers.max(1))
            .progress_interval(self.progress_interval)
            .build()
    }
}
