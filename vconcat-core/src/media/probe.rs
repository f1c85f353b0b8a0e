//! FFprobe integration for extracting the per-file metadata the planner
//! depends on: dimensions, duration, frame rate, and audio presence.

use crate::error::{CoreError, CoreResult};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Metadata for one video file, computed once per path and never mutated.
///
/// Missing numeric fields are reported as zero rather than failing the
/// probe: downstream consumers treat a zero dimension or frame rate as
/// "unknown/incompatible", not as a crash condition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VideoInfo {
    /// Width of the video stream in pixels, 0 when unreported
    pub width: u32,
    /// Height of the video stream in pixels, 0 when unreported
    pub height: u32,
    /// Container-level duration in seconds, 0.0 when unreported
    pub duration_secs: f64,
    /// Frame rate derived from the stream's rational rate string, 0.0 when unreported
    pub frame_rate: f64,
    /// Whether at least one audio stream is present
    pub has_audio: bool,
}

impl VideoInfo {
    /// Pixel area of the frame, the measure used to rank videos.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Probes a video file and normalizes the result into a [`VideoInfo`].
///
/// A file without any video stream is a probe failure; partial metadata
/// (missing dimensions, duration, or frame rate string) is not.
pub fn probe_video(path: &Path) -> CoreResult<VideoInfo> {
    log::debug!("Running ffprobe on: {}", path.display());

    let metadata = ffprobe(path).map_err(|err| map_probe_error(err, path))?;

    let video_stream = metadata
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| CoreError::NoVideoStream(path.to_path_buf()))?;

    let duration_secs = metadata
        .format
        .duration
        .as_deref()
        .and_then(|d| d.parse::<f64>().ok())
        .unwrap_or(0.0);

    let has_audio = metadata
        .streams
        .iter()
        .any(|s| s.codec_type.as_deref() == Some("audio"));

    Ok(VideoInfo {
        width: dimension_or_zero(video_stream.width),
        height: dimension_or_zero(video_stream.height),
        duration_secs,
        frame_rate: parse_frame_rate(&video_stream.r_frame_rate),
        has_audio,
    })
}

/// Parses a rational frame rate string such as "30000/1001" or "25".
///
/// The numerator defaults to 0 when unparseable, the denominator to 1 when
/// absent, unparseable, or not positive, so the division is always defined.
#[must_use]
pub fn parse_frame_rate(raw: &str) -> f64 {
    let mut parts = raw.splitn(2, '/');
    let numerator = parts
        .next()
        .and_then(|n| n.trim().parse::<f64>().ok())
        .unwrap_or(0.0);
    let denominator = parts
        .next()
        .and_then(|d| d.trim().parse::<f64>().ok())
        .filter(|d| *d > 0.0)
        .unwrap_or(1.0);
    numerator / denominator
}

fn dimension_or_zero(value: Option<i64>) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0)
}

fn map_probe_error(err: FfProbeError, path: &Path) -> CoreError {
    let message = match err {
        FfProbeError::Io(io_err) => format!("failed to run ffprobe: {io_err}"),
        FfProbeError::Status(output) => format!(
            "ffprobe exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        FfProbeError::Deserialize(err) => format!("could not parse ffprobe output: {err}"),
        _ => format!("unknown ffprobe error: {err:?}"),
    };
    CoreError::Probe {
        path: path.to_path_buf(),
        message,
    }
}
