//! JSON export format implementation

use crate::dataset::DatasetRow;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesExporter;

impl ExportFormat for JsonLinesExporter {
    fn header(&self) -> Option<String> {
        None // JSON doesn't need a header
    }

    fn format_row(&self, row: &DatasetRow) -> String {
        // Rows only hold integers, which always serialize
        serde_json::to_string(row).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FRAME_FIELD_COUNT;
    use crate::metadata::MatchContext;

    #[test]
    fn test_json_line() {
        let row = DatasetRow::new(
            MatchContext {
                match_result: 0,
                character1: 3,
                character2: 7,
            },
            [1; FRAME_FIELD_COUNT],
        );
        let line = JsonLinesExporter.format_row(&row);
        assert!(line.starts_with(r#"{"MatchResult":0,"Character1":3,"Character2":7,"Frame":1,"#));

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["Tension2"], 1);
        assert!(JsonLinesExporter.header().is_none());
    }
}
