//! Fixed defaults and constants used across the planner and the CLI.

/// File extensions (lowercase, without dot) considered video inputs during
/// directory discovery.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv"];

/// Name of the concat demuxer list file written into the temp directory.
pub const CONCAT_LIST_FILENAME: &str = "vconcat_list.txt";

/// Frame rate a video must match to be eligible for the demuxer-level copy
/// path. Stream copy without re-encoding drifts when inputs disagree on
/// timing, so only inputs at the reference rate qualify.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Valid x264 encoder presets, slowest-compressing last.
pub const PRESETS: &[&str] = &[
    "ultrafast",
    "superfast",
    "veryfast",
    "faster",
    "fast",
    "medium",
    "slow",
    "slower",
    "veryslow",
    "placebo",
];

/// Preset used when the caller does not pick one.
pub const DEFAULT_PRESET: &str = "fast";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "concat.mp4";

// ---- Encode defaults for the re-encoding strategies ----

/// Video codec for re-encoded output.
pub const VIDEO_CODEC: &str = "libx264";

/// Constant rate factor for re-encoded output.
pub const DEFAULT_CRF: u8 = 23;

/// Pixel format forced on re-encoded output.
pub const PIXEL_FORMAT: &str = "yuv420p";

/// Audio codec for re-encoded output.
pub const AUDIO_CODEC: &str = "aac";

/// Audio bitrate for re-encoded output.
pub const AUDIO_BITRATE: &str = "192k";
