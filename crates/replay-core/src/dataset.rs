//! Labeled dataset rows

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::layout::{FRAME_FIELD_COUNT, FRAME_FIELDS};
use crate::metadata::MatchContext;

/// Columns that come from the match label rather than the frame record
pub const LABEL_COLUMNS: [&str; 3] = ["MatchResult", "Character1", "Character2"];

/// Total number of dataset columns
pub const COLUMN_COUNT: usize = LABEL_COLUMNS.len() + FRAME_FIELD_COUNT;

/// Dataset header names, in output order
pub fn columns() -> [&'static str; COLUMN_COUNT] {
    std::array::from_fn(|i| {
        if i < LABEL_COLUMNS.len() {
            LABEL_COLUMNS[i]
        } else {
            FRAME_FIELDS[i - LABEL_COLUMNS.len()].name
        }
    })
}

/// One frame record prefixed with its match label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetRow {
    pub context: MatchContext,
    pub frame: [i64; FRAME_FIELD_COUNT],
}

impl DatasetRow {
    pub fn new(context: MatchContext, frame: [i64; FRAME_FIELD_COUNT]) -> Self {
        Self { context, frame }
    }

    /// All column values, in output order
    pub fn values(&self) -> [i64; COLUMN_COUNT] {
        let label = [
            self.context.match_result as i64,
            self.context.character1 as i64,
            self.context.character2 as i64,
        ];
        std::array::from_fn(|i| {
            if i < label.len() {
                label[i]
            } else {
                self.frame[i - label.len()]
            }
        })
    }

    /// Value of a column by header name
    pub fn get(&self, column: &str) -> Option<i64> {
        columns()
            .iter()
            .position(|&c| c == column)
            .map(|i| self.values()[i])
    }
}

impl Serialize for DatasetRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMN_COUNT))?;
        for (name, value) in columns().iter().zip(self.values()) {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> DatasetRow {
        let mut frame = [0i64; FRAME_FIELD_COUNT];
        for (i, v) in frame.iter_mut().enumerate() {
            *v = i as i64 * 10;
        }
        frame[7] = -42;
        DatasetRow::new(
            MatchContext {
                match_result: 1,
                character1: 4,
                character2: 5,
            },
            frame,
        )
    }

    #[test]
    fn test_columns() {
        let cols = columns();
        assert_eq!(cols.len(), 25);
        assert_eq!(&cols[..5], &["MatchResult", "Character1", "Character2", "Frame", "MatchCountdown"]);
        assert_eq!(cols[5], "MT Value");
        assert_eq!(cols[24], "Tension2");
    }

    #[test]
    fn test_values_prefix_label() {
        let values = sample_row().values();
        assert_eq!(&values[..4], &[1, 4, 5, 0]);
        assert_eq!(values[4], 10);
        assert_eq!(values[24], 210);
    }

    #[test]
    fn test_get_by_name() {
        let row = sample_row();
        assert_eq!(row.get("Guard1"), Some(-42));
        assert_eq!(row.get("Character2"), Some(5));
        assert_eq!(row.get("Missing"), None);
    }

    #[test]
    fn test_serialize_as_map() {
        let json = serde_json::to_value(sample_row()).unwrap();
        assert_eq!(json["MatchResult"], 1);
        assert_eq!(json["Guard1"], -42);
        assert_eq!(json["MT Value"], 20);
    }
}
