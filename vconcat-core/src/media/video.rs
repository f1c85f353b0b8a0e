//! A handle to one input file with a write-once metadata cache.

use crate::error::CoreResult;
use crate::media::probe::{VideoInfo, probe_video};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// One input video: a path plus lazily probed, memoized metadata.
///
/// The first call to [`Video::info`] runs ffprobe; every later call returns
/// the cached result. Concurrent first callers block on the single
/// in-flight probe instead of issuing duplicates.
#[derive(Debug, Clone)]
pub struct Video {
    path: PathBuf,
    info: OnceCell<VideoInfo>,
}

impl Video {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            info: OnceCell::new(),
        }
    }

    /// Creates a handle whose metadata is already known, skipping the probe.
    pub fn preloaded(path: impl Into<PathBuf>, info: VideoInfo) -> Self {
        Self {
            path: path.into(),
            info: OnceCell::with_value(info),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns this video's metadata, probing the file on first use.
    ///
    /// A probe failure is not cached; the error carries the offending path.
    pub fn info(&self) -> CoreResult<&VideoInfo> {
        self.info.get_or_try_init(|| probe_video(&self.path))
    }
}
