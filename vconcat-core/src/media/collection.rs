//! An ordered collection of videos with a shared, at-most-once bulk probe.
//!
//! Collection order is significant: it is the concatenation order and the
//! filtergraph input-index order, and no operation reorders it.

use crate::error::{CoreError, CoreResult};
use crate::media::probe::VideoInfo;
use crate::media::video::Video;
use crate::utils::format_duration;
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Ordered set of input videos sharing one bulk metadata load.
#[derive(Debug, Default)]
pub struct VideoCollection {
    videos: Vec<Video>,
    loaded: OnceCell<Vec<VideoInfo>>,
}

impl VideoCollection {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::from_videos(paths.into_iter().map(Video::new).collect())
    }

    pub fn from_videos(videos: Vec<Video>) -> Self {
        Self {
            videos,
            loaded: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Probes every video and returns their metadata in input order.
    ///
    /// The load runs at most once per collection: later callers (including
    /// concurrent ones arriving while the first load is in flight) observe
    /// the same completed result. Any probe failure aborts the whole batch;
    /// handles that were already probed keep their cache, so a retry after
    /// a transient failure does not re-probe them.
    pub fn load_all(&self) -> CoreResult<&[VideoInfo]> {
        self.loaded
            .get_or_try_init(|| {
                let start = Instant::now();
                let infos = self
                    .videos
                    .par_iter()
                    .map(|video| video.info().copied())
                    .collect::<CoreResult<Vec<VideoInfo>>>()?;
                log::debug!(
                    "Probed {} video(s) in {:.0?}",
                    self.videos.len(),
                    start.elapsed()
                );
                Ok(infos)
            })
            .map(Vec::as_slice)
    }

    /// The video with the largest frame area, first-encountered on ties.
    pub fn largest(&self) -> CoreResult<Option<&Video>> {
        self.extremal_by_area(|area, best| area > best)
    }

    /// The video with the smallest frame area, first-encountered on ties.
    pub fn smallest(&self) -> CoreResult<Option<&Video>> {
        self.extremal_by_area(|area, best| area < best)
    }

    fn extremal_by_area(
        &self,
        better: impl Fn(u64, u64) -> bool,
    ) -> CoreResult<Option<&Video>> {
        if self.videos.is_empty() {
            return Ok(None);
        }
        self.load_all()?;

        let mut best: Option<(&Video, u64)> = None;
        for video in &self.videos {
            let area = video.info()?.area();
            best = match best {
                Some((_, best_area)) if !better(area, best_area) => best,
                _ => Some((video, area)),
            };
        }
        Ok(best.map(|(video, _)| video))
    }

    /// Returns the videos whose metadata satisfies the predicate, in input
    /// order. The collection itself is not modified.
    pub fn filter<F>(&self, predicate: F) -> CoreResult<Vec<&Video>>
    where
        F: Fn(&VideoInfo) -> bool,
    {
        self.load_all()?;

        let mut kept = Vec::new();
        for video in &self.videos {
            if predicate(video.info()?) {
                kept.push(video);
            }
        }

        let total_secs: f64 = kept
            .iter()
            .filter_map(|video| video.info().ok())
            .map(|info| info.duration_secs)
            .sum();
        log::debug!(
            "[filter] kept {} of {} video(s), total duration {}",
            kept.len(),
            self.videos.len(),
            format_duration(total_secs)
        );

        Ok(kept)
    }

    /// Writes a concat demuxer list for the videos surviving `predicate`,
    /// in input order, replacing any previous content at `list_path`.
    ///
    /// Each line has the form `file '<path>'` with literal single quotes
    /// escaped as `'\''`, the quoting the concat demuxer requires.
    pub fn write_concat_list<F>(&self, list_path: &Path, predicate: F) -> CoreResult<()>
    where
        F: Fn(&VideoInfo) -> bool,
    {
        let kept = self.filter(predicate)?;
        if kept.is_empty() {
            return Err(CoreError::EmptySelection(
                "no videos to concatenate after filtering".to_string(),
            ));
        }

        let lines: Vec<String> = kept
            .iter()
            .map(|video| concat_list_line(video.path()))
            .collect();
        std::fs::write(list_path, lines.join("\n"))?;

        log::debug!("Wrote concat list: {}", list_path.display());
        Ok(())
    }
}

fn concat_list_line(path: &Path) -> String {
    let escaped = path.to_string_lossy().replace('\'', "'\\''");
    format!("file '{escaped}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_list_line_plain() {
        assert_eq!(
            concat_list_line(Path::new("clips/a.mp4")),
            "file 'clips/a.mp4'"
        );
    }

    #[test]
    fn test_concat_list_line_escapes_single_quotes() {
        assert_eq!(
            concat_list_line(Path::new("a'b.mp4")),
            "file 'a'\\''b.mp4'"
        );
        assert_eq!(
            concat_list_line(Path::new("it's a 'clip'.mkv")),
            "file 'it'\\''s a '\\''clip'\\''.mkv'"
        );
    }
}
