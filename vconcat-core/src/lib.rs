//! Core library for concatenating video files using ffmpeg and ffprobe.
//!
//! This crate probes input files once each, decides how the inputs can be
//! joined (lossless demuxer-level concat when they are compatible, or a
//! normalizing filtergraph when they are not), and produces the ffmpeg
//! invocation that performs the join.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vconcat_core::{PlanOptions, Strategy, VideoCollection, plan_concat};
//! use vconcat_core::external::ffmpeg;
//!
//! let collection = VideoCollection::new(["intro.mp4", "main.mkv", "outro.webm"]);
//! let options = PlanOptions::default();
//!
//! let plan = plan_concat(&collection, Strategy::FilterConcat, &options).unwrap();
//! ffmpeg::run(ffmpeg::command_for_plan(&plan)).unwrap();
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod planning;
pub mod utils;

// Re-exports for public API
pub use config::{DEFAULT_OUTPUT, DEFAULT_PRESET, PRESETS, REFERENCE_FRAME_RATE};
pub use discovery::find_video_files;
pub use error::{CoreError, CoreResult};
pub use media::{Video, VideoCollection, VideoInfo, probe_video};
pub use planning::{ConcatPlan, EncodeParams, PlanOptions, Strategy, plan_concat};
