//! ExportFormat trait definition

use std::io::Write;

use crate::dataset::DatasetRow;
use crate::error::Result;

/// Trait for export format implementations
///
/// Provides a common interface for different export formats (CSV, TSV, JSON)
pub trait ExportFormat {
    /// Returns the header line for the format (None for formats without headers)
    fn header(&self) -> Option<String>;

    /// Format a single dataset row
    fn format_row(&self, row: &DatasetRow) -> String;

    /// Format multiple rows, header first
    fn format_rows(&self, rows: &[DatasetRow]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for row in rows {
            output.push_str(&self.format_row(row));
            output.push('\n');
        }
        output
    }

    /// Stream rows into a writer, header first
    fn write_rows<W: Write>(&self, writer: &mut W, rows: &[DatasetRow]) -> Result<()>
    where
        Self: Sized,
    {
        if let Some(header) = self.header() {
            writeln!(writer, "{}", header)?;
        }
        for row in rows {
            writeln!(writer, "{}", self.format_row(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}
