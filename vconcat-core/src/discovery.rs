//! Discovery of default input files.
//!
//! Scans the top level of a directory for video files (by extension,
//! case-insensitive) and orders them by modification time, oldest first,
//! so a directory of sequentially recorded clips concatenates in recording
//! order. Subdirectories are not searched.

use crate::config::VIDEO_EXTENSIONS;
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Finds video files in the top level of `dir`, sorted by mtime ascending.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the discovered video files
/// * `Err(CoreError::NoFilesFound)` - If the directory holds no video files
pub fn find_video_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files: Vec<(PathBuf, SystemTime)> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_video = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if !is_video {
            continue;
        }

        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);
        files.push((path, modified));
    }

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort_by_key(|(_, modified)| *modified);
    Ok(files.into_iter().map(|(path, _)| path).collect())
}
