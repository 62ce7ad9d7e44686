//! Frame region decoding
//!
//! The decompressed payload holds a savestate count followed by fixed-stride
//! frame records. Before any row is produced the first records are probed:
//! each frame counter must sit on the capture granularity and increase from
//! one record to the next. A single bad record discards the whole file.

use crate::dataset::DatasetRow;
use crate::error::Result;
use crate::layout::{FRAME_FIELD_COUNT, FRAME_FIELDS, frame};
use crate::metadata::MatchContext;
use crate::reader::ByteReader;
use crate::report::{ErrorKind, ValidationError};

/// Decompressed frame payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn reader(&self) -> ByteReader<'_> {
        ByteReader::new(&self.data)
    }

    /// Number of records declared by the payload
    pub fn savestate_total(&self) -> Result<u32> {
        self.reader().u32(frame::SAVESTATE_COUNT)
    }

    /// Number of whole records physically present
    pub fn available_records(&self) -> usize {
        self.data.len().saturating_sub(frame::FIRST_RECORD) / frame::RECORD_SIZE
    }

    /// Borrow record `index`
    pub fn record(&self, index: usize) -> Result<FrameRecord<'_>> {
        let bytes = self
            .reader()
            .slice(frame::record_offset(index), frame::RECORD_SIZE)?;
        Ok(FrameRecord { index, bytes })
    }

    fn probe_index(&self, offset: usize) -> Result<u64> {
        self.reader().unsigned(offset, frame::PROBE_INDEX_WIDTH)
    }

    /// Check the leading records for granularity and ordering
    pub fn probe(&self, file: &str) -> std::result::Result<(), ValidationError> {
        for i in 0..frame::PROBE_RECORDS {
            let pos = frame::record_offset(i);
            let next_pos = pos + frame::RECORD_SIZE;

            let (current, next) = match (self.probe_index(pos), self.probe_index(next_pos)) {
                (Ok(current), Ok(next)) => (current, next),
                _ => {
                    return Err(ValidationError::new(
                        ErrorKind::Frames,
                        format!(
                            "{}, {}/{}, payload ends at {}",
                            i,
                            pos,
                            next_pos,
                            self.data.len()
                        ),
                        file,
                    ));
                }
            };

            if current % frame::FRAME_GRANULARITY != 0 || current >= next {
                return Err(ValidationError::new(
                    ErrorKind::Frames,
                    format!("{}, {}/{}, {}/{}", i, pos, next_pos, current, next),
                    file,
                ));
            }
        }
        Ok(())
    }

    /// Project every declared record into a dataset row
    ///
    /// Records that would extend past the payload reject the file instead of
    /// producing a partial set of rows.
    pub fn extract_rows(
        &self,
        context: MatchContext,
        file: &str,
    ) -> std::result::Result<Vec<DatasetRow>, ValidationError> {
        let total = self.savestate_total().map_err(|_| {
            ValidationError::new(
                ErrorKind::Frames,
                format!("missing savestate count, payload is {} bytes", self.data.len()),
                file,
            )
        })? as usize;

        if total > self.available_records() {
            return Err(ValidationError::new(
                ErrorKind::Frames,
                format!(
                    "{} savestates declared, {} present in {} bytes",
                    total,
                    self.available_records(),
                    self.data.len()
                ),
                file,
            ));
        }

        let mut rows = Vec::with_capacity(total);
        for index in 0..total {
            let values = self
                .record(index)
                .and_then(|record| record.values())
                .map_err(|e| {
                    ValidationError::new(ErrorKind::Frames, format!("record {}: {}", index, e), file)
                })?;
            rows.push(DatasetRow::new(context, values));
        }
        Ok(rows)
    }
}

/// Borrowed view of one frame record
#[derive(Debug, Clone, Copy)]
pub struct FrameRecord<'a> {
    pub index: usize,
    bytes: &'a [u8],
}

impl<'a> FrameRecord<'a> {
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Frame counter of this record
    pub fn frame_index(&self) -> Result<u32> {
        ByteReader::new(self.bytes).u32(FRAME_FIELDS[0].offset)
    }

    /// Every table field, in column order
    pub fn values(&self) -> Result<[i64; FRAME_FIELD_COUNT]> {
        let reader = ByteReader::new(self.bytes);
        let mut values = [0i64; FRAME_FIELD_COUNT];
        for (slot, spec) in values.iter_mut().zip(FRAME_FIELDS.iter()) {
            *slot = reader.field(0, spec)?;
        }
        Ok(values)
    }
}
