//! Dataset export formats

mod delimited;
mod format;
mod json;

use std::io::Write;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::dataset::DatasetRow;
use crate::error::Result;

pub use delimited::{CsvExporter, TsvExporter, format_header, format_row};
pub use format::ExportFormat;
pub use json::JsonLinesExporter;

/// Selectable dataset output format
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl DatasetFormat {
    /// Render rows in this format
    pub fn format_rows(self, rows: &[DatasetRow]) -> String {
        match self {
            Self::Csv => CsvExporter.format_rows(rows),
            Self::Tsv => TsvExporter.format_rows(rows),
            Self::Json => JsonLinesExporter.format_rows(rows),
        }
    }

    /// Stream rows in this format
    pub fn write_rows<W: Write>(self, writer: &mut W, rows: &[DatasetRow]) -> Result<()> {
        match self {
            Self::Csv => CsvExporter.write_rows(writer, rows),
            Self::Tsv => TsvExporter.write_rows(writer, rows),
            Self::Json => JsonLinesExporter.write_rows(writer, rows),
        }
    }
}
