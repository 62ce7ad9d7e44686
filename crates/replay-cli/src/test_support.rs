//! Synthetic replay bytes for command tests.

use replay_core::compress;
use replay_core::layout::{frame, header};

fn header_bytes(rounds: (u8, u8)) -> Vec<u8> {
    let metadata_size = header::MIN_METADATA_SIZE as u16;
    let mut data = vec![0u8; header::METADATA_START + metadata_size as usize];
    data[header::METADATA_SIZE..header::METADATA_SIZE + 2]
        .copy_from_slice(&metadata_size.to_le_bytes());
    data[header::CHARACTER1] = 3;
    data[header::CHARACTER2] = 7;
    data[header::TEAM_MODE] = 1;
    data[header::ROUNDS1] = rounds.0;
    data[header::ROUNDS2] = rounds.1;
    data
}

/// Accepted replay declaring `savestates` records (at least six are stored
/// so the frame probe has a full window)
pub fn valid_replay(savestates: u32) -> Vec<u8> {
    let stored = (savestates as usize).max(frame::PROBE_RECORDS + 1);
    let mut payload = vec![0u8; frame::record_offset(stored)];
    payload[frame::SAVESTATE_COUNT..frame::FIRST_RECORD].copy_from_slice(&savestates.to_le_bytes());
    for i in 0..stored {
        let pos = frame::record_offset(i);
        payload[pos..pos + 4].copy_from_slice(&(i as u32 * 60).to_le_bytes());
    }

    let mut data = header_bytes((2, 1));
    data.extend(compress(&payload).unwrap());
    data
}

/// Replay rejected for an impossible 1/1 score
pub fn bad_rounds_replay() -> Vec<u8> {
    header_bytes((1, 1))
}
