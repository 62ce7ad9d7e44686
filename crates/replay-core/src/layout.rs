//! Byte layout of the replay format
//!
//! This module centralizes every offset used to read replay files.
//! Header offsets are absolute positions in the raw file; frame offsets are
//! relative to the decompressed payload or to the start of a frame record.

/// Header layout (absolute offsets into the raw replay file)
pub mod header {
    /// Position of the 2-byte metadata length field
    pub const METADATA_SIZE: usize = 12;
    pub const METADATA_SIZE_WIDTH: usize = 2;

    /// First byte of the metadata block
    pub const METADATA_START: usize = 26;

    /// Metadata blocks shorter than this come from an older replay format
    pub const MIN_METADATA_SIZE: usize = 99;

    pub const CHARACTER1: usize = 114;
    pub const CHARACTER2: usize = 115;
    pub const EXTRA_OPTIONS: usize = 116;
    pub const TEAM_MODE: usize = 117;
    pub const AC_VERSION: usize = 118;
    pub const ROUNDS1: usize = 123;
    pub const ROUNDS2: usize = 124;

    /// Smallest file that holds every fixed header field
    pub const MIN_HEADER_LEN: usize = ROUNDS2 + 1;

    /// Team-mode byte value for solo matches
    pub const SOLO_TEAM_MODE: u64 = 1;

    /// Rounds needed to take a best-of-three match
    pub const ROUNDS_TO_WIN: u64 = 2;
}

/// Frame region layout (offsets into the decompressed payload)
pub mod frame {
    /// Offset of the first frame record
    pub const FIRST_RECORD: usize = 2312;

    /// Savestate count lives in the 4 bytes before the first record
    pub const SAVESTATE_COUNT: usize = FIRST_RECORD - 4;
    pub const SAVESTATE_COUNT_WIDTH: usize = 4;

    /// Width of one frame record
    pub const RECORD_SIZE: usize = 260;

    /// Number of leading records checked before extraction
    pub const PROBE_RECORDS: usize = 5;

    /// Frame counters are captured on 60-frame boundaries
    pub const FRAME_GRANULARITY: u64 = 60;

    /// The probe compares the 16-bit frame counter at the start of a record
    pub const PROBE_INDEX_WIDTH: usize = 2;

    /// Absolute payload offset of record `index`
    pub const fn record_offset(index: usize) -> usize {
        FIRST_RECORD + index * RECORD_SIZE
    }
}

/// One fixed-width little-endian field inside a frame record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub signed: bool,
}

impl FieldSpec {
    const fn unsigned(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            width: 4,
            signed: false,
        }
    }

    const fn signed(name: &'static str, offset: usize) -> Self {
        Self {
            name,
            offset,
            width: 4,
            signed: true,
        }
    }

    /// First byte past the field, relative to the record start
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Number of fields extracted from every frame record
pub const FRAME_FIELD_COUNT: usize = 22;

/// Frame record fields, in dataset column order
pub const FRAME_FIELDS: [FieldSpec; FRAME_FIELD_COUNT] = [
    FieldSpec::unsigned("Frame", 0),
    FieldSpec::unsigned("MatchCountdown", 4),
    FieldSpec::unsigned("MT Value", 16),
    FieldSpec::unsigned("Action1", 32),
    FieldSpec::unsigned("Action2", 36),
    FieldSpec::unsigned("Burst1", 40),
    FieldSpec::unsigned("Burst2", 44),
    FieldSpec::signed("Guard1", 48),
    FieldSpec::signed("Guard2", 52),
    FieldSpec::unsigned("Health1", 56),
    FieldSpec::unsigned("Health2", 60),
    FieldSpec::unsigned("RoundTimer", 64),
    FieldSpec::signed("PosX1", 68),
    FieldSpec::signed("PosX2", 72),
    FieldSpec::signed("PosY1", 76),
    FieldSpec::signed("PosY2", 80),
    FieldSpec::unsigned("RoundsWon1", 84),
    FieldSpec::unsigned("RoundsWon2", 88),
    FieldSpec::unsigned("Stun1", 92),
    FieldSpec::unsigned("Stun2", 96),
    FieldSpec::unsigned("Tension1", 100),
    FieldSpec::unsigned("Tension2", 104),
];

/// Look up a frame field by its column name
pub fn frame_field(name: &str) -> Option<&'static FieldSpec> {
    FRAME_FIELDS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fields_fit_in_record() {
        for field in &FRAME_FIELDS {
            assert!(field.end() <= frame::RECORD_SIZE, "{} overflows", field.name);
        }
    }

    #[test]
    fn test_frame_fields_do_not_overlap() {
        let mut sorted = FRAME_FIELDS.to_vec();
        sorted.sort_by_key(|f| f.offset);
        for pair in sorted.windows(2) {
            assert!(pair[0].end() <= pair[1].offset);
        }
    }

    #[test]
    fn test_frame_field_lookup() {
        let guard = frame_field("Guard1").unwrap();
        assert_eq!(guard.offset, 48);
        assert!(guard.signed);
        assert!(frame_field("Nope").is_none());
    }

    #[test]
    fn test_savestate_count_precedes_first_record() {
        assert_eq!(frame::SAVESTATE_COUNT, 2308);
        assert_eq!(frame::record_offset(0), 2312);
        assert_eq!(frame::record_offset(2), 2312 + 520);
    }
}
