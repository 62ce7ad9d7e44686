//! Replay file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// List the regular files in `dir`, sorted by name
///
/// Sorting keeps the dataset and diagnostics identical between runs.
pub fn list_replays(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read replay directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_replays_sorted_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.rpl"), b"b").unwrap();
        fs::write(dir.path().join("a.rpl"), b"a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let paths = list_replays(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.rpl", "b.rpl"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_replays(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("Failed to read replay directory"));
    }
}
