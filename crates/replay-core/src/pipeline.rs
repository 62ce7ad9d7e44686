//! Per-file replay processing and the batch driver
//!
//! Each replay goes through header validation, payload decompression, the
//! frame probe and row extraction. The first failing stage rejects the file;
//! the rejection is recorded in the batch [`ValidationReport`] and processing
//! moves on to the next file.
//!
//! ## Example
//!
//! ```ignore
//! use replay_core::pipeline::{Pipeline, PipelineOptions};
//!
//! let options = PipelineOptions::builder().workers(4).build();
//! let output = Pipeline::new(options).run_paths(&paths)?;
//! println!("{}", output.report.summary());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::dataset::DatasetRow;
use crate::decompress::decompress;
use crate::error::{Error, Result};
use crate::frames::FrameBuffer;
use crate::metadata::validate_metadata;
use crate::report::{ErrorKind, ValidationError, ValidationReport};

/// Raw replay bytes and the name used in diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl ReplayFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Read a replay fully into memory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, data })
    }
}

/// Result of processing one replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Accepted(Vec<DatasetRow>),
    Rejected(ValidationError),
}

impl FileOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Accepted(_) => None,
        }
    }
}

/// Decode `file` into rows, stopping at the first failed check
pub fn decode_replay(file: &ReplayFile) -> std::result::Result<Vec<DatasetRow>, ValidationError> {
    let (metadata, context) = validate_metadata(&file.data, &file.name)?;

    let payload = file
        .data
        .get(metadata.payload_start()..)
        .ok_or_else(|| {
            ValidationError::new(
                ErrorKind::Decompression,
                format!(
                    "payload starts at {} past end of {}-byte file",
                    metadata.payload_start(),
                    file.data.len()
                ),
                &file.name,
            )
        })?;

    let frames = decompress(payload)
        .map(FrameBuffer::new)
        .map_err(|e| ValidationError::new(ErrorKind::Decompression, e.to_string(), &file.name))?;

    frames.probe(&file.name)?;
    frames.extract_rows(context, &file.name)
}

/// Process one replay; never fails past the file boundary
pub fn process_replay(file: &ReplayFile) -> FileOutcome {
    match decode_replay(file) {
        Ok(rows) => {
            debug!("Accepted {} ({} rows)", file.name, rows.len());
            FileOutcome::Accepted(rows)
        }
        Err(e) => {
            debug!("Rejected {}", e);
            FileOutcome::Rejected(e)
        }
    }
}

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Worker threads; 1 processes files on the calling thread
    pub workers: usize,
    /// Log progress every this many files (0 disables)
    pub progress_interval: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            progress_interval: 500,
        }
    }
}

impl PipelineOptions {
    /// Create a new options builder
    pub fn builder() -> PipelineOptionsBuilder {
        PipelineOptionsBuilder::default()
    }
}

/// Builder for PipelineOptions
#[derive(Debug, Clone, Default)]
pub struct PipelineOptionsBuilder {
    workers: Option<usize>,
    progress_interval: Option<usize>,
}

impl PipelineOptionsBuilder {
    /// Set the number of worker threads
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set how often progress is logged
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    /// Build the options
    pub fn build(self) -> PipelineOptions {
        let default = PipelineOptions::default();
        PipelineOptions {
            workers: self.workers.unwrap_or(default.workers),
            progress_interval: self.progress_interval.unwrap_or(default.progress_interval),
        }
    }
}

/// Rows and diagnostics for a whole batch
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub rows: Vec<DatasetRow>,
    pub report: ValidationReport,
}

impl BatchOutput {
    /// Fold one file's outcome into the batch
    pub fn push(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Accepted(rows) => {
                self.report.record_accepted();
                self.rows.extend(rows);
            }
            FileOutcome::Rejected(e) => self.report.record_rejected(&e),
        }
    }
}

/// Batch driver
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Process in-memory replays in order
    pub fn run_files(&self, files: &[ReplayFile]) -> Result<BatchOutput> {
        let outcomes = self.map_ordered(files, |file| Ok(process_replay(file)))?;
        Ok(self.merge(outcomes))
    }

    /// Load and process replay files in order
    ///
    /// Each file is read, decoded and dropped on its own; an unreadable file
    /// aborts the batch.
    pub fn run_paths(&self, paths: &[PathBuf]) -> Result<BatchOutput> {
        let outcomes = self.map_ordered(paths, |path| {
            let file = ReplayFile::load(path)?;
            Ok(process_replay(&file))
        })?;
        Ok(self.merge(outcomes))
    }

    /// Apply `f` to every item, keeping input order in the output
    fn map_ordered<T, F>(&self, items: &[T], f: F) -> Result<Vec<FileOutcome>>
    where
        T: Sync,
        F: Fn(&T) -> Result<FileOutcome> + Sync,
    {
        let done = AtomicUsize::new(0);
        let step = |item: &T| -> Result<FileOutcome> {
            let outcome = f(item)?;
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            if self.options.progress_interval > 0 && n % self.options.progress_interval == 0 {
                info!("Replay count: {}", n);
            }
            Ok(outcome)
        };

        if self.options.workers > 1 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.workers)
                .build()
                .map_err(|e| Error::InvalidConfig(format!("failed to build thread pool: {}", e)))?
                .install(|| items.par_iter().map(step).collect())
        } else {
            items.iter().map(step).collect()
        }
    }

    fn merge(&self, outcomes: Vec<FileOutcome>) -> BatchOutput {
        let mut output = BatchOutput::default();
        for outcome in outcomes {
            output.push(outcome);
        }
        info!(
            "Processed {} replays: {} accepted, {} excluded, {} rows",
            output.report.total(),
            output.report.accepted(),
            output.report.rejected(),
            output.rows.len()
        );
        output
    }
}
