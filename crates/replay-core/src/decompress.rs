//! zlib boundary between the raw replay and its frame payload

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::{Error, Result};

const OUTPUT_CHUNK: usize = 64 * 1024;

/// Inflate a zlib stream
///
/// The stream must run to its end marker: truncated or corrupted input is
/// reported as [`Error::Decompression`] rather than returning partial output.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(compressed.len().saturating_mul(4).max(OUTPUT_CHUNK));

    loop {
        if out.len() == out.capacity() {
            out.reserve(OUTPUT_CHUNK);
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let input = &compressed[before_in as usize..];

        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::None)
            .map_err(|e| Error::Decompression(e.to_string()))?;

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                if inflater.total_in() == before_in && inflater.total_out() == before_out {
                    return Err(Error::Decompression(format!(
                        "stream ended after {} bytes without an end marker",
                        compressed.len()
                    )));
                }
            }
        }
    }
}

/// Deflate `data` into a zlib stream
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
