//! Strategy selection: turns a video collection into an executable
//! concatenation plan.
//!
//! The strategy is resolved once, by the caller; there is no automatic
//! fallback between strategies. A cheap-path run whose eligible set is
//! empty fails instead of silently re-encoding.

use crate::config;
use crate::error::{CoreError, CoreResult};
use crate::media::{VideoCollection, VideoInfo};
use crate::planning::filtergraph::{FilterGraph, concat_stage, segment_filters};
use std::path::PathBuf;

/// How the inputs should be joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Demuxer-level concat with stream copy. Lossless and fast, but only
    /// inputs at the reference frame rate are eligible.
    DemuxCopy,
    /// Demuxer-level concat of the eligible inputs followed by one
    /// re-encode with timestamp repair.
    DemuxReenc,
    /// Per-input normalization filtergraph; accepts any mix of inputs.
    FilterConcat,
}

/// Per-run settings handed from the CLI into the planner.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Destination file for the concatenated output.
    pub output: PathBuf,
    /// x264 preset for the re-encoding strategies.
    pub preset: String,
    /// Directory for the intermediate concat list; system temp dir when unset.
    pub list_dir: Option<PathBuf>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(config::DEFAULT_OUTPUT),
            preset: config::DEFAULT_PRESET.to_string(),
            list_dir: None,
        }
    }
}

impl PlanOptions {
    /// Fixed path of the concat demuxer list. Re-planning replaces the
    /// file's content rather than accumulating new files.
    #[must_use]
    pub fn concat_list_path(&self) -> PathBuf {
        self.list_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
            .join(config::CONCAT_LIST_FILENAME)
    }
}

/// Output encoding parameters for the re-encoding strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeParams {
    pub video_codec: String,
    pub preset: String,
    pub crf: u8,
    pub pix_fmt: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl EncodeParams {
    #[must_use]
    pub fn with_preset(preset: &str) -> Self {
        Self {
            video_codec: config::VIDEO_CODEC.to_string(),
            preset: preset.to_string(),
            crf: config::DEFAULT_CRF,
            pix_fmt: config::PIXEL_FORMAT.to_string(),
            audio_codec: config::AUDIO_CODEC.to_string(),
            audio_bitrate: config::AUDIO_BITRATE.to_string(),
        }
    }
}

/// An executable concatenation plan, consumed once by the ffmpeg boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ConcatPlan {
    /// Byte-copy the eligible inputs listed in `list_file` into `output`.
    DemuxCopy { list_file: PathBuf, output: PathBuf },
    /// Concat the eligible inputs listed in `list_file`, then re-encode
    /// once, scaling to the reconciled dimensions.
    DemuxReenc {
        list_file: PathBuf,
        width: u32,
        height: u32,
        encode: EncodeParams,
        output: PathBuf,
    },
    /// Decode every input through `filtergraph` and encode the joined
    /// result.
    FilterConcat {
        inputs: Vec<PathBuf>,
        filtergraph: String,
        encode: EncodeParams,
        output: PathBuf,
    },
}

/// Builds the plan for `strategy` over `collection`.
pub fn plan_concat(
    collection: &VideoCollection,
    strategy: Strategy,
    options: &PlanOptions,
) -> CoreResult<ConcatPlan> {
    match strategy {
        Strategy::DemuxCopy => plan_demux_copy(collection, options),
        Strategy::DemuxReenc => plan_demux_reenc(collection, options),
        Strategy::FilterConcat => plan_filter_concat(collection, options),
    }
}

/// Copy-path eligibility: stream copy concatenation drifts unless every
/// input runs at the reference frame rate.
fn demux_eligible(info: &VideoInfo) -> bool {
    info.frame_rate == config::REFERENCE_FRAME_RATE
}

fn plan_demux_copy(
    collection: &VideoCollection,
    options: &PlanOptions,
) -> CoreResult<ConcatPlan> {
    let list_file = write_eligible_list(collection, options)?;
    Ok(ConcatPlan::DemuxCopy {
        list_file,
        output: options.output.clone(),
    })
}

fn plan_demux_reenc(
    collection: &VideoCollection,
    options: &PlanOptions,
) -> CoreResult<ConcatPlan> {
    let list_file = write_eligible_list(collection, options)?;
    let (width, height) = target_dimensions(collection)?;
    Ok(ConcatPlan::DemuxReenc {
        list_file,
        width,
        height,
        encode: EncodeParams::with_preset(&options.preset),
        output: options.output.clone(),
    })
}

fn plan_filter_concat(
    collection: &VideoCollection,
    options: &PlanOptions,
) -> CoreResult<ConcatPlan> {
    if collection.is_empty() {
        return Err(CoreError::EmptyCollection);
    }

    let (width, height) = target_dimensions(collection)?;

    let mut graph = FilterGraph::new();
    let mut inputs = Vec::with_capacity(collection.len());
    for (index, video) in collection.videos().iter().enumerate() {
        let info = video.info()?;
        for stage in segment_filters(index, info, width, height)? {
            graph.push(stage);
        }
        inputs.push(video.path().to_path_buf());
    }
    graph.push(concat_stage(collection.len()));

    Ok(ConcatPlan::FilterConcat {
        inputs,
        filtergraph: graph.build(),
        encode: EncodeParams::with_preset(&options.preset),
        output: options.output.clone(),
    })
}

fn write_eligible_list(
    collection: &VideoCollection,
    options: &PlanOptions,
) -> CoreResult<PathBuf> {
    let list_file = options.concat_list_path();
    collection.write_concat_list(&list_file, demux_eligible)?;
    Ok(list_file)
}

/// The output canvas: the dimensions of the largest input, so no source is
/// upscaled beyond itself and every frame fits.
fn target_dimensions(collection: &VideoCollection) -> CoreResult<(u32, u32)> {
    let largest = collection.largest()?.ok_or(CoreError::EmptyCollection)?;
    let info = largest.info()?;
    Ok((info.width, info.height))
}
