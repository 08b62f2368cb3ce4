//! Feed file enumeration and decoding.

use crate::error::{ConvertError, Result};
use crate::model::nvd::NvdFeed;
use std::path::{Path, PathBuf};

/// Enumerate feed files under `dir` in reverse lexicographic order.
///
/// Only regular files whose name contains `.json` qualify. The ordering is
/// a deliberate tie-break carried over from the feed layout: when several
/// files describe overlapping data, the file sorted earlier is processed
/// later and wins.
pub fn list_feed_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::io(dir, e))?;
        let path = entry.path();
        if path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains(".json"))
        {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(ConvertError::EmptyInput {
            path: dir.to_path_buf(),
        });
    }

    files.sort();
    files.reverse();
    Ok(files)
}

/// Decode one feed file. A file that cannot be read or decoded is fatal
/// for the whole batch.
pub fn load_feed(path: &Path) -> Result<NvdFeed> {
    let content = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ConvertError::decode(path, e))
}
