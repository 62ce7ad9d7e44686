//! # replay-core
//!
//! Core library for turning fighting-game replay files into a labeled
//! frame dataset.
//!
//! This crate provides:
//! - Bounds-checked little-endian field reading
//! - Header validation against the supported replay format
//! - zlib payload decompression
//! - Frame record probing and row extraction
//! - Batch aggregation with a per-kind rejection report
//! - CSV, TSV and NDJSON export of dataset rows

pub mod dataset;
pub mod decompress;
pub mod error;
pub mod export;
pub mod frames;
pub mod layout;
pub mod metadata;
pub mod pipeline;
pub mod reader;
pub mod report;

#[cfg(test)]
pub mod testing;

pub use dataset::{COLUMN_COUNT, DatasetRow, columns};
pub use decompress::{compress, decompress};
pub use error::{Error, Result};
pub use export::{CsvExporter, DatasetFormat, ExportFormat, JsonLinesExporter, TsvExporter};
pub use frames::{FrameBuffer, FrameRecord};
pub use layout::{FRAME_FIELDS, FieldSpec};
pub use metadata::{MatchContext, Metadata, validate_metadata};
pub use pipeline::{
    BatchOutput, FileOutcome, Pipeline, PipelineOptions, PipelineOptionsBuilder, ReplayFile,
    decode_replay, process_replay,
};
pub use reader::{ByteReader, read_signed, read_unsigned};
pub use report::{ErrorKind, ReportSummary, ValidationError, ValidationReport};
