//! Synthetic replay builders for tests

use crate::decompress::compress;
use crate::layout::{FieldSpec, frame, header};

/// Builds a decompressed frame payload
#[derive(Debug, Clone)]
pub struct FrameBufferBuilder {
    savestate_total: u32,
    records: Vec<[u8; frame::RECORD_SIZE]>,
}

impl FrameBufferBuilder {
    pub fn new() -> Self {
        Self {
            savestate_total: 0,
            records: Vec::new(),
        }
    }

    /// Records whose frame counters are 0, 60, 120, ...
    pub fn with_valid_records(count: usize) -> Self {
        let indices: Vec<u32> = (0..count as u32).map(|i| i * 60).collect();
        Self::new().frame_indices(&indices)
    }

    pub fn savestate_total(mut self, total: u32) -> Self {
        self.savestate_total = total;
        self
    }

    /// Append one record per index, with the index as the frame counter
    pub fn frame_indices(mut self, indices: &[u32]) -> Self {
        for &index in indices {
            let mut record = [0u8; frame::RECORD_SIZE];
            record[0..4].copy_from_slice(&index.to_le_bytes());
            self.records.push(record);
        }
        self
    }

    /// Overwrite a field of record `index`
    pub fn set(mut self, index: usize, field: &FieldSpec, value: i64) -> Self {
        let bytes = (value as i32).to_le_bytes();
        self.records[index][field.offset..field.end()].copy_from_slice(&bytes[..field.width]);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = vec![0u8; frame::FIRST_RECORD];
        data[frame::SAVESTATE_COUNT..frame::FIRST_RECORD]
            .copy_from_slice(&self.savestate_total.to_le_bytes());
        for record in &self.records {
            data.extend_from_slice(record);
        }
        data
    }
}

impl Default for FrameBufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a raw replay file
#[derive(Debug, Clone)]
pub struct ReplayBuilder {
    pub metadata_size: u16,
    pub character1: u8,
    pub character2: u8,
    pub extra_options: u8,
    pub team_mode: u8,
    pub ac_version: u8,
    pub rounds: (u8, u8),
    pub payload: Vec<u8>,
}

impl Default for ReplayBuilder {
    fn default() -> Self {
        Self {
            metadata_size: header::MIN_METADATA_SIZE as u16,
            character1: 3,
            character2: 7,
            extra_options: 0,
            team_mode: 1,
            ac_version: 0,
            rounds: (2, 1),
            payload: Vec::new(),
        }
    }
}

impl ReplayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata_size(mut self, size: u16) -> Self {
        self.metadata_size = size;
        self
    }

    pub fn characters(mut self, c1: u8, c2: u8) -> Self {
        self.character1 = c1;
        self.character2 = c2;
        self
    }

    pub fn extra_options(mut self, value: u8) -> Self {
        self.extra_options = value;
        self
    }

    pub fn team_mode(mut self, value: u8) -> Self {
        self.team_mode = value;
        self
    }

    pub fn ac_version(mut self, value: u8) -> Self {
        self.ac_version = value;
        self
    }

    pub fn rounds(mut self, r1: u8, r2: u8) -> Self {
        self.rounds = (r1, r2);
        self
    }

    /// Use an already-compressed payload
    pub fn raw_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Compress `frames` and use it as the payload
    pub fn frames(self, frames: &FrameBufferBuilder) -> Self {
        let payload = compress(&frames.build()).unwrap();
        self.raw_payload(payload)
    }

    pub fn build(&self) -> Vec<u8> {
        let metadata_end = header::METADATA_START + self.metadata_size as usize;
        let mut data = vec![0u8; metadata_end.max(header::MIN_HEADER_LEN)];

        data[header::METADATA_SIZE..header::METADATA_SIZE + 2]
            .copy_from_slice(&self.metadata_size.to_le_bytes());
        data[header::CHARACTER1] = self.character1;
        data[header::CHARACTER2] = self.character2;
        data[header::EXTRA_OPTIONS] = self.extra_options;
        data[header::TEAM_MODE] = self.team_mode;
        data[header::AC_VERSION] = self.ac_version;
        data[header::ROUNDS1] = self.rounds.0;
        data[header::ROUNDS2] = self.rounds.1;

        data.extend_from_slice(&self.payload);
        data
    }
}
