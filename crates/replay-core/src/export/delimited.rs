//! Delimited text export (CSV and TSV)

use crate::dataset::{DatasetRow, columns};

use super::format::ExportFormat;

/// CSV exporter, the default dataset artifact
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ExportFormat for CsvExporter {
    fn header(&self) -> Option<String> {
        Some(format_header(","))
    }

    fn format_row(&self, row: &DatasetRow) -> String {
        format_row(row, ",")
    }
}

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(format_header("\t"))
    }

    fn format_row(&self, row: &DatasetRow) -> String {
        format_row(row, "\t")
    }
}

/// Header line with every column name
///
/// Column names contain no delimiters or quotes, so no escaping is needed.
pub fn format_header(delimiter: &str) -> String {
    columns().join(delimiter)
}

/// One row of integer values
pub fn format_row(row: &DatasetRow, delimiter: &str) -> String {
    row.values()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(delimiter)
}
