//! Replay header parsing and acceptance rules

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::layout::header;
use crate::reader::ByteReader;
use crate::report::{ErrorKind, ValidationError};

/// Fixed header fields of a replay file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub metadata_size: u16,
    pub character1: u8,
    pub character2: u8,
    pub extra_options: u8,
    pub team_mode: u8,
    pub ac_version: u8,
    pub rounds1: u8,
    pub rounds2: u8,
}

impl Metadata {
    /// Read every header field; fails if the file is too short to hold them
    pub fn parse(data: &[u8]) -> Result<Self> {
        let reader = ByteReader::new(data);
        Ok(Self {
            metadata_size: reader.u16(header::METADATA_SIZE)?,
            character1: reader.u8(header::CHARACTER1)?,
            character2: reader.u8(header::CHARACTER2)?,
            extra_options: reader.u8(header::EXTRA_OPTIONS)?,
            team_mode: reader.u8(header::TEAM_MODE)?,
            ac_version: reader.u8(header::AC_VERSION)?,
            rounds1: reader.u8(header::ROUNDS1)?,
            rounds2: reader.u8(header::ROUNDS2)?,
        })
    }

    /// Offset of the compressed payload
    pub fn payload_start(&self) -> usize {
        header::METADATA_START + self.metadata_size as usize
    }

    fn rounds_label(&self) -> String {
        format!("{}/{}", self.rounds1, self.rounds2)
    }

    /// One side took exactly two rounds and the other at most two
    fn is_best_of_three(&self) -> bool {
        let (r1, r2) = (self.rounds1 as u64, self.rounds2 as u64);
        (r1 == header::ROUNDS_TO_WIN && r2 <= header::ROUNDS_TO_WIN)
            || (r2 == header::ROUNDS_TO_WIN && r1 <= header::ROUNDS_TO_WIN)
    }

    /// Apply the acceptance rules in order; the first failure wins
    ///
    /// The rounds check runs before the draw check, so 2/2 is reported as a
    /// draw while 1/1 and 0/0 are reported as bad round counts.
    pub fn validate(&self, file: &str) -> std::result::Result<MatchContext, ValidationError> {
        let reject = |kind: ErrorKind, message: String| {
            debug!("Rejecting {}: {} ({})", file, kind, message);
            Err(ValidationError::new(kind, message, file))
        };

        if (self.metadata_size as usize) < header::MIN_METADATA_SIZE {
            return reject(ErrorKind::Metadata, self.metadata_size.to_string());
        }
        if self.extra_options != 0 {
            return reject(ErrorKind::Options, self.extra_options.to_string());
        }
        if self.team_mode as u64 != header::SOLO_TEAM_MODE {
            return reject(ErrorKind::Team, self.team_mode.to_string());
        }
        if self.ac_version != 0 {
            return reject(ErrorKind::Ac, self.ac_version.to_string());
        }
        if !self.is_best_of_three() {
            return reject(ErrorKind::Rounds, self.rounds_label());
        }
        if self.rounds1 == self.rounds2 {
            return reject(ErrorKind::Draw, self.rounds_label());
        }

        let match_result = if self.rounds2 as u64 == header::ROUNDS_TO_WIN {
            1
        } else {
            0
        };

        Ok(MatchContext {
            match_result,
            character1: self.character1,
            character2: self.character2,
        })
    }
}

/// Match-level label shared by every row of one replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchContext {
    /// 0 when side 1 won, 1 when side 2 won
    pub match_result: u8,
    pub character1: u8,
    pub character2: u8,
}

/// Parse and validate the header of `data`
///
/// A file too short to contain the header is treated like an undersized
/// metadata block.
pub fn validate_metadata(
    data: &[u8],
    file: &str,
) -> std::result::Result<(Metadata, MatchContext), ValidationError> {
    let metadata = Metadata::parse(data).map_err(|e| {
        debug!("Rejecting {}: truncated header ({})", file, e);
        ValidationError::new(
            ErrorKind::Metadata,
            format!("truncated header ({} bytes)", data.len()),
            file,
        )
    })?;
    let context = metadata.validate(file)?;
    Ok((metadata, context))
}
