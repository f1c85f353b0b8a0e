// vconcat-core/tests/discovery_tests.rs

use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;
use vconcat_core::discovery::find_video_files;
use vconcat_core::error::CoreError;

#[test]
fn test_find_video_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("clip1.mp4"))?;
    File::create(input_dir.join("clip2.MKV"))?; // Case insensitivity
    File::create(input_dir.join("clip3.webm"))?;
    File::create(input_dir.join("notes.txt"))?;
    File::create(input_dir.join("cover.jpg"))?;
    fs::create_dir(input_dir.join("subdir"))?;
    File::create(input_dir.join("subdir").join("nested.mp4"))?; // Top level only

    let mut files = find_video_files(input_dir)?;

    // Sort for consistent comparison (discovery orders by mtime)
    files.sort();
    let names: Vec<_> = files
        .iter()
        .filter_map(|f| f.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["clip1.mp4", "clip2.MKV", "clip3.webm"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_video_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("notes.txt"))?;

    let result = find_video_files(dir.path());
    assert!(matches!(result, Err(CoreError::NoFilesFound)));

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_video_files_nonexistent_dir() {
    let missing = PathBuf::from("surely_this_does_not_exist_vconcat");
    let result = find_video_files(&missing);
    assert!(matches!(result, Err(CoreError::Io(_))));
}
