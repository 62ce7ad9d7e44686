//! Inspect command: walk one replay through every check and print what was
//! found along the way.

use std::path::Path;

use anyhow::{Context, Result};
use replay_core::layout::frame;
use replay_core::{FrameBuffer, Metadata, ReplayFile, decompress, process_replay};

use super::hexdump::format_hexdump;

/// Run the inspect command
pub fn run(path: &Path, hexdump: bool) -> Result<()> {
    let file = ReplayFile::load(path)
        .with_context(|| format!("Failed to read replay {}", path.display()))?;

    println!("=== Replay Inspection ===");
    println!("File: {} ({} bytes)", file.name, file.data.len());
    println!();

    let metadata = match Metadata::parse(&file.data) {
        Ok(m) => m,
        Err(e) => {
            println!("Header unreadable: {}", e);
            return Ok(());
        }
    };

    print_metadata(&metadata);

    if hexdump {
        let end = metadata.payload_start().min(file.data.len());
        println!();
        println!("Header bytes (0x000..0x{:03X}):", end);
        for line in format_hexdump(&file.data[..end], true) {
            println!("{}", line);
        }
    }

    println!();
    match metadata.validate(&file.name) {
        Ok(ctx) => println!(
            "Header: accepted (MatchResult={}, Character1={}, Character2={})",
            ctx.match_result, ctx.character1, ctx.character2
        ),
        Err(e) => {
            println!("Header: rejected ({})", e);
            return Ok(());
        }
    }

    let payload = file
        .data
        .get(metadata.payload_start()..)
        .unwrap_or_default();
    println!("Compressed payload: {} bytes", payload.len());

    match decompress(payload) {
        Ok(data) => print_frames(&FrameBuffer::new(data), &file.name),
        Err(e) => println!("Payload: {}", e),
    }

    println!();
    let outcome = process_replay(&file);
    match outcome.rejection() {
        None => println!("Overall: accepted"),
        Some(e) => println!("Overall: rejected ({})", e),
    }
    Ok(())
}

fn print_metadata(m: &Metadata) {
    println!("Fields:");
    println!("  metadata_size @  12: {}", m.metadata_size);
    println!("  character1    @ 114: {}", m.character1);
    println!("  character2    @ 115: {}", m.character2);
    println!("  extra_options @ 116: {}", m.extra_options);
    println!("  team_mode     @ 117: {}", m.team_mode);
    println!("  ac_version    @ 118: {}", m.ac_version);
    println!("  rounds        @ 123: {}/{}", m.rounds1, m.rounds2);
}

fn print_frames(frames: &FrameBuffer, name: &str) {
    println!("Decompressed payload: {} bytes", frames.len());
    match frames.savestate_total() {
        Ok(total) => println!(
            "Savestates: {} declared, {} present",
            total,
            frames.available_records()
        ),
        Err(e) => println!("Savestates: unreadable ({})", e),
    }

    let shown = frame::PROBE_RECORDS + 1;
    let indices: Vec<String> = (0..shown)
        .map(|i| match frames.record(i).and_then(|r| r.frame_index()) {
            Ok(index) => index.to_string(),
            Err(_) => "-".to_string(),
        })
        .collect();
    println!("First frame counters: {}", indices.join(", "));

    match frames.probe(name) {
        Ok(()) => println!("Frame probe: passed"),
        Err(e) => println!("Frame probe: failed ({})", e),
    }
}
