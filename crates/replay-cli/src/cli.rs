//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use replay_core::DatasetFormat;

#[derive(Parser)]
#[command(name = "replay-dataset")]
#[command(version, about = "Build a frame dataset from fighting-game replays")]
pub struct Args {
    /// Configuration file (TOML); missing file means defaults
    #[arg(short, long, global = true, default_value = "replay-dataset.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate every replay and write the dataset and diagnostics
    Build {
        /// Directory containing replay files
        #[arg(short, long, env = "REPLAY_DIR")]
        input: Option<PathBuf>,

        /// Dataset output path
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Diagnostics output path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Dataset format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Worker threads (1 = sequential)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Validate every replay and print the diagnostics summary
    Check {
        /// Directory containing replay files
        #[arg(short, long, env = "REPLAY_DIR")]
        input: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show header fields and frame checks for a single replay
    Inspect {
        /// Replay file
        file: PathBuf,

        /// Also dump the raw header bytes
        #[arg(long)]
        hexdump: bool,
    },
}

/// Dataset formats selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl From<OutputFormat> for DatasetFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => DatasetFormat::Csv,
            OutputFormat::Tsv => DatasetFormat::Tsv,
            OutputFormat::Json => DatasetFormat::Json,
        }
    }
}
